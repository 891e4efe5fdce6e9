use nullproj::{properties, report::Report, utils::matrix_from_array};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // keep the whole pipeline on the main thread
    faer::set_global_parallelism(faer::Parallelism::None);

    let m = matrix_from_array(&[
        [0.742, -0.837, -0.483],
        [0.612, 0.837, 0.483],
        [0.0, 0.958, 0.092],
    ]);

    // compute the projector and check that it annihilates M
    let p = nullproj::null_space_projector(m.as_ref())?;
    let check = nullproj::check_zero_product(m.as_ref(), p.as_ref());

    log::info!(
        "idempotency error: {:e}, symmetry error: {:e}, null space dimension: {}",
        properties::idempotency_error(p.as_ref()),
        properties::symmetry_error(p.as_ref()),
        properties::null_space_dimension(p.as_ref()),
    );

    let report = Report {
        m: m.as_ref(),
        p: p.as_ref(),
        check: &check,
    };
    println!("{report}");

    Ok(())
}
