use linsys::prelude::{SolverConfig, solve_summary};

fn main() {
    let equations = "2x + 3y + 8z = 7\nx - 4y + 6z = 1\n3x - y - z = 8";

    match solve_summary(equations, &SolverConfig::default()) {
        Ok(lines) => println!("{}", lines.join("\n")),
        Err(err) => eprintln!("solve error: {err}"),
    }
}
