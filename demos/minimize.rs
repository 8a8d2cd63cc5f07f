//! Basic minimization example

use qmc_logic::{minimize, MinimizeConfig, Minimizer};

fn main() -> std::io::Result<()> {
    println!("Boolean Function Minimization Example\n");

    println!("Function: F(A, B, C) = m(0, 1, 5, 7)");
    println!("(true for 000, 001, 101 and 111)\n");

    let expr = minimize(&[0, 1, 5, 7], &["A", "B", "C"])?;
    println!("Minimized: F = {}\n", expr);

    println!("Function: G(A, B, C) = m(0, 1, 2, 5, 6, 7)");
    println!("No implicant is essential, so the greedy phase decides.\n");

    let minimizer = Minimizer::new(MinimizeConfig::new().with_max_implicants(10_000));
    let solution = minimizer.solve(&[0, 1, 2, 5, 6, 7], &["A", "B", "C"])?;

    println!("Prime implicants:");
    for (implicant, covered) in solution.table().iter() {
        println!("  {}  covers {:?}", implicant, covered);
    }
    println!(
        "\nSelected {} of {} ({} essential)",
        solution.cover().len(),
        solution.prime_implicants().len(),
        solution.cover().essential_count()
    );
    println!("Minimized: G = {}", solution);

    Ok(())
}
