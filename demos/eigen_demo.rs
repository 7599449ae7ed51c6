use spektr::config::EigenOptions;
use spektr::context::EigenContext;
use spektr::matrix::random::random_symmetric;
use spektr::utils::residual::eigen_residual;

fn main() {
    let n = 8;
    let mut rng = rand::thread_rng();
    let a = random_symmetric(&mut rng, n);

    // Default: ten fixed iterations.
    let eig = EigenContext::default().solve(&a).unwrap();
    println!("after {} iterations (off-diagonal norm {:.3e}):", eig.stats.iterations, eig.stats.off_diagonal_norm);
    print!("{eig}");

    // Same problem, iterated to convergence.
    let opts = EigenOptions {
        max_iterations: 10_000,
        off_diagonal_tol: Some(1e-12),
        ..EigenOptions::default()
    };
    let eig = EigenContext::new(opts).solve(&a).unwrap();
    println!(
        "\nconverged after {} iterations (off-diagonal norm {:.3e}):",
        eig.stats.iterations, eig.stats.off_diagonal_norm
    );
    print!("{eig}");

    let worst = eig
        .pairs()
        .into_iter()
        .map(|(value, vector)| eigen_residual(&a, value, &vector))
        .fold(0.0f64, f64::max);
    println!("\nworst eigenpair residual: {worst:.3e}");
}
