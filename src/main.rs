use log::info;
use rocket_lab::config::scenario::LaunchScenario;
use rocket_lab::config::vehicle::DemoRocket;
use rocket_lab::constants::STANDARD_GRAVITY;
use rocket_lab::plotting::figure::DEFAULT_SIZE;
use rocket_lab::{
    plot_altitude, plot_altitude_and_velocity, plot_velocity, tsiolkovsky_delta_v,
    vertical_rocket_equations, PlotOptions,
};
use std::error::Error;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    for (name, equation) in vertical_rocket_equations() {
        info!("{}: {}", name, equation);
    }

    // Burn the whole propellant load: 500 kg at 5 kg/s lasts 100 s
    let scenario = LaunchScenario::default().until(150.0);
    let params = DemoRocket::params_with_drag();
    let trajectory = scenario.integrate(&params)?;

    let ideal_delta_v = tsiolkovsky_delta_v(
        DemoRocket::ISP,
        STANDARD_GRAVITY,
        DemoRocket::WET_MASS,
        DemoRocket::WET_MASS - DemoRocket::MDOT * 99.0,
    )
    .evalf()?;
    info!("Ideal delta-v to 99 s: {:.1} m/s", ideal_delta_v);

    match trajectory.depletion_index() {
        Some(i) => info!(
            "Burnout at t={:.1}s: h={:.1}m, v={:.1}m/s",
            trajectory.t[i], trajectory.h[i], trajectory.v[i]
        ),
        None => info!("Propellant remaining at t={:.1}s", scenario.t_end),
    }

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    trajectory.save_csv(output_dir.join("trajectory.csv"))?;

    plot_altitude(&trajectory.t, &trajectory.h, &PlotOptions::altitude())?
        .save_svg(output_dir.join("altitude.svg"), DEFAULT_SIZE)?;
    plot_velocity(&trajectory.t, &trajectory.v, &PlotOptions::velocity())?
        .save_svg(output_dir.join("velocity.svg"), DEFAULT_SIZE)?;
    plot_altitude_and_velocity(
        &trajectory.t,
        &trajectory.h,
        &trajectory.v,
        &PlotOptions::altitude_and_velocity(),
    )?
    .save_svg(output_dir.join("trajectory.svg"), DEFAULT_SIZE)?;

    println!("Simulation data has been written to output/");

    Ok(())
}
