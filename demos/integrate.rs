use neuralmath::prelude::Engine;

fn main() {
    let engine = Engine::new();

    for expr in ["2*x^3 - x + 4", "e^(2*x)", "sec(x)^2", "1/(1+x^2)"] {
        match engine.integrate(expr) {
            Ok(answer) => println!("∫ {expr} dx = {}", answer.value),
            Err(err) => eprintln!("∫ {expr} dx: {err}"),
        }
    }
}
