//! Minimize every function of three variables and check each result against
//! its truth table

use qmc_logic::{minimize, Error, SopExpr};

fn main() -> Result<(), Error> {
    let variables = ["A", "B", "C"];
    let mut failures = 0;

    for mask in 0u64..256 {
        let minterms: Vec<u64> = (0..8).filter(|m| mask & (1 << m) != 0).collect();
        let rendered = minimize(&minterms, &variables)?;
        let actual = SopExpr::parse(&rendered)?.minterms(&variables)?;

        let status = if actual == minterms {
            "ok"
        } else {
            failures += 1;
            "MISMATCH"
        };
        println!("{:<24} {:<28} {}", format!("{:?}", minterms), rendered, status);
    }

    println!();
    if failures == 0 {
        println!("All 256 functions verified.");
    } else {
        println!("{} functions did not match their truth table.", failures);
        std::process::exit(1);
    }
    Ok(())
}
