extern crate plotters;
use plotters::prelude::*;

extern crate bezier_easing;
use bezier_easing::{CubicBezierEasing, Easing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // the CSS keyword curves plus one that overshoots on both ends
    let curves = [
        ("linear", CubicBezierEasing::linear(), BLACK),
        ("ease", CubicBezierEasing::ease(), RED),
        ("ease-in", CubicBezierEasing::ease_in(), BLUE),
        ("ease-out", CubicBezierEasing::ease_out(), GREEN),
        ("ease-in-out", CubicBezierEasing::ease_in_out(), MAGENTA),
        ("back", CubicBezierEasing::new(0.68, -0.55, 0.265, 1.55)?, CYAN),
    ];

    let root = BitMapBackend::new("easing_curves.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Cubic Bezier Timing Functions", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0f64..1f64, -0.7f64..1.7f64)?;

    chart.configure_mesh().draw()?;

    // render each easing with enough samples to hide the polyline
    let nsteps: usize = 500;
    for (name, easing, color) in curves {
        let graph: Vec<(f64, f64)> = (0..=nsteps)
            .map(|x| {
                let x = x as f64 / nsteps as f64;
                (x, easing.ease(x))
            })
            .collect();

        chart
            .draw_series(LineSeries::new(graph, &color))?
            .label(format!("{name}: {easing}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
