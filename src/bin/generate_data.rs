//! Sample dataset generator.
//!
//! Writes `carnot_data.csv` (ideal-gas Carnot cycle) and `qgp_data.csv`
//! (two-era scalar field evolution) into the working directory, in the
//! schemas the `carnot` and `plasma` viewers expect.

use anyhow::Context;
use polars::prelude::*;
use std::fs::File;

const POINTS_PER_BRANCH: usize = 25;

/// Hot and cold reservoir temperatures (units of n*R = 1) and the
/// monatomic adiabatic index.
const T_HOT: f64 = 500.0;
const T_COLD: f64 = 300.0;
const GAMMA: f64 = 5.0 / 3.0;

/// Ideal-gas Carnot cycle: two isotherms joined by two adiabats, traversed
/// clockwise and closed back onto the starting state.
fn carnot_cycle() -> (Vec<f64>, Vec<f64>) {
    let v1 = 1.0;
    let v2 = 2.0;
    // Adiabat: T * V^(gamma-1) constant, so the expansion ratio between the
    // isotherms is (Th/Tc)^(1/(gamma-1)).
    let ratio = (T_HOT / T_COLD).powf(1.0 / (GAMMA - 1.0));
    let v3 = v2 * ratio;
    let v4 = v1 * ratio;

    let mut volume = Vec::new();
    let mut pressure = Vec::new();
    let mut push_branch = |start: f64, end: f64, p_of_v: &dyn Fn(f64) -> f64| {
        for i in 0..POINTS_PER_BRANCH {
            let t = i as f64 / POINTS_PER_BRANCH as f64;
            let v = start + t * (end - start);
            volume.push(v);
            pressure.push(p_of_v(v));
        }
    };

    // Isothermal expansion at Th.
    push_branch(v1, v2, &|v| T_HOT / v);
    // Adiabatic expansion down to Tc.
    let p2 = T_HOT / v2;
    push_branch(v2, v3, &|v| p2 * (v2 / v).powf(GAMMA));
    // Isothermal compression at Tc.
    push_branch(v3, v4, &|v| T_COLD / v);
    // Adiabatic compression back to the start.
    let p4 = T_COLD / v4;
    push_branch(v4, v1, &|v| p4 * (v4 / v).powf(GAMMA));

    // Close the loop.
    volume.push(v1);
    pressure.push(T_HOT / v1);

    (volume, pressure)
}

struct QgpRow {
    step: i64,
    phi: f64,
    potential: f64,
    kinetic: f64,
    era: &'static str,
}

/// Scalar field evolution through the radiation and matter eras.
///
/// The field grows geometrically; energy densities follow the same
/// functional forms as the source simulation with unit scales, so the
/// columns span many decades and exercise the viewer's log rescaling.
fn qgp_rows() -> Vec<QgpRow> {
    const NU: f64 = 0.001;
    const GROWTH: f64 = 1.2;
    const MATTER_STEPS: usize = 150;
    // Vacuum energy scales for each era.
    const VI: f64 = 1.0;
    const VF: f64 = 1e-8;

    let mut rows = Vec::new();
    let mut phi: f64 = 1e-12;
    let mut step = 0i64;

    // Radiation era: runs until the field reaches the transition scale.
    while phi <= 1.0 {
        let x = phi.powi(4);
        rows.push(QgpRow {
            step,
            phi,
            potential: VI * (1.0 + NU * x) / (1.0 + x).powi(2),
            kinetic: (1.0 - NU) * VI * x / (1.0 + x).powi(2),
            era: "radiation",
        });
        phi *= GROWTH;
        step += 1;
    }

    // Matter era.
    for _ in 0..MATTER_STEPS {
        let y = phi.powf(-3.0);
        rows.push(QgpRow {
            step,
            phi,
            potential: VF * (1.0 + NU * y),
            kinetic: (1.0 - NU) * VF * y / (1.0 + NU * y),
            era: "matter",
        });
        phi *= GROWTH;
        step += 1;
    }

    rows
}

fn write_csv(path: &str, df: &mut DataFrame) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create {path}"))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("cannot write {path}"))?;
    log::info!("wrote {}: {} rows", path, df.height());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (volume, pressure) = carnot_cycle();
    let mut carnot = df!("V" => volume, "P" => pressure)?;
    write_csv("carnot_data.csv", &mut carnot)?;

    let rows = qgp_rows();
    let mut qgp = df!(
        "step" => rows.iter().map(|r| r.step).collect::<Vec<_>>(),
        "phi" => rows.iter().map(|r| r.phi).collect::<Vec<_>>(),
        "Potential" => rows.iter().map(|r| r.potential).collect::<Vec<_>>(),
        "Kinetic" => rows.iter().map(|r| r.kinetic).collect::<Vec<_>>(),
        "Era" => rows.iter().map(|r| r.era).collect::<Vec<_>>(),
    )?;
    write_csv("qgp_data.csv", &mut qgp)?;

    Ok(())
}
