use crate::body::Body;
use crate::info;
use crate::math::{apply, linspace};
use crate::radius_lut::mean_subsatellite_radius;

pub fn write_csv(
    filename: &std::path::Path,
    signals: &[(&str, &[f64])],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(filename)?;

    let titles = signals.iter().map(|s| s.0);

    writer.write_record(titles)?;

    for i in 0.. {
        let iter = signals
            .iter()
            .map(|s| s.1.get(i))
            .map(|s| s.map(|e| format!("{:0.7}", e)))
            .collect::<Option<Vec<_>>>();
        if let Some(row) = iter {
            writer.write_record(row)?;
        } else {
            break;
        }
    }

    writer.flush()?;

    Ok(())
}

/// Sub-satellite radius over a range of inclinations, fixed `e` and `w`.
pub fn export_radius_vs_inclination(
    filename: &std::path::Path,
    from: f64,
    to: f64,
    count: usize,
    e: f64,
    w: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let i = linspace(from, to, count);
    let rs = apply(&i, |i| mean_subsatellite_radius(i, e, w));

    info!(
        "Writing {} radius samples (e={}, w={}) to {}",
        i.len(),
        e,
        w,
        filename.display()
    );

    write_csv(filename, &[("i_deg", &i), ("rs_km", &rs)])
}

/// Mean motion and period over a range of semi-major axes.
pub fn export_mean_motion_vs_sma(
    filename: &std::path::Path,
    from: f64,
    to: f64,
    count: usize,
    body: &Body,
) -> Result<(), Box<dyn std::error::Error>> {
    let a = linspace(from, to, count);
    let mm = apply(&a, |a| body.mean_motion(a));
    let period = apply(&a, |a| body.period(a));

    info!(
        "Writing {} mean motion samples about {} to {}",
        a.len(),
        body.name,
        filename.display()
    );

    write_csv(
        filename,
        &[("a_km", &a), ("mm_rev_day", &mm), ("period_s", &period)],
    )
}
