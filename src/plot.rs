//! BER curve rendering
//!
//! Presentation layer over [`BerPoint`] data: a log-scale plot of simulated
//! vs. theoretical BER against SNR, written to a PNG file. The estimator
//! itself never depends on this module, so headless runs skip it entirely.

use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::estimator::BerPoint;

/// Lower edge of the displayed BER range; zero-error points clamp here
/// since a log axis cannot show zero
pub const DISPLAY_FLOOR: f64 = 1e-5;

/// Upper edge of the displayed BER range
pub const DISPLAY_CEIL: f64 = 1.0;

/// Plot failure, reported by the presentation layer only
#[derive(Debug, Error)]
pub enum PlotError {
    /// Nothing to draw
    #[error("no BER points to plot")]
    EmptyCurve,

    /// Backend or file error from the drawing pipeline
    #[error("image rendering failed: {0}")]
    Rendering(String),
}

/// Clamp a BER value into the displayable log-scale range
pub fn clamp_to_display(ber: f64) -> f64 {
    ber.clamp(DISPLAY_FLOOR, DISPLAY_CEIL)
}

/// Render the simulated and theoretical curves to a PNG file
pub fn render_ber_curve(points: &[BerPoint], path: impl AsRef<Path>) -> Result<(), PlotError> {
    if points.is_empty() {
        return Err(PlotError::EmptyCurve);
    }

    let (mut x_min, mut x_max) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
        (lo.min(p.snr_db), hi.max(p.snr_db))
    });
    if x_max - x_min < f64::EPSILON {
        // Single-SNR sweep still needs a non-degenerate axis
        x_min -= 1.0;
        x_max += 1.0;
    }

    let root = BitMapBackend::new(path.as_ref(), (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::Rendering(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("BPSK Modulation over AWGN Channel", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, (DISPLAY_FLOOR..DISPLAY_CEIL).log_scale())
        .map_err(|e| PlotError::Rendering(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("SNR (Eb/No in dB)")
        .y_desc("Bit Error Rate (BER)")
        .draw()
        .map_err(|e| PlotError::Rendering(format!("{:?}", e)))?;

    let simulated: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.snr_db, clamp_to_display(p.simulated_ber)))
        .collect();
    let theoretical: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.snr_db, clamp_to_display(p.theoretical_ber)))
        .collect();

    chart
        .draw_series(LineSeries::new(simulated.iter().cloned(), BLUE.stroke_width(2)))
        .map_err(|e| PlotError::Rendering(format!("{:?}", e)))?
        .label("Simulated BPSK")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(
            simulated
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(|e| PlotError::Rendering(format!("{:?}", e)))?;

    chart
        .draw_series(DashedLineSeries::new(
            theoretical.iter().cloned(),
            6,
            4,
            RED.stroke_width(2),
        ))
        .map_err(|e| PlotError::Rendering(format!("{:?}", e)))?
        .label("Theoretical BPSK")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| PlotError::Rendering(format!("{:?}", e)))?;

    root.present()
        .map_err(|e| PlotError::Rendering(e.to_string()))?;

    Ok(())
}
