use neuralmath::prelude::Engine;

fn main() {
    let engine = Engine::new();

    for equation in ["2*x + 3 = 7", "x^2 - 5*x + 6 = 0", "x^2 + 1 = 0", "x^3 - x = 0"] {
        match engine.solve_equation(equation) {
            Ok(answer) => {
                println!("{equation}  =>  {} ({:?})", answer.value, answer.kind);
                for step in &answer.steps {
                    println!("    {step}");
                }
            }
            Err(err) => eprintln!("{equation}: {err}"),
        }
    }
}
