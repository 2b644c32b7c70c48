use neuralmath::prelude::Engine;

fn main() {
    let engine = Engine::new();

    for expr in ["x^2 - 4", "x^2 - 5*x + 6", "x^2 + x + 1"] {
        match engine.factor(expr) {
            Ok(answer) => println!("factor {expr} = {}", answer.value),
            Err(err) => eprintln!("factor {expr}: {err}"),
        }
    }

    match engine.expand("(x + 2)*(x - 3)") {
        Ok(answer) => println!("expand (x + 2)*(x - 3) = {}", answer.value),
        Err(err) => eprintln!("expand: {err}"),
    }
}
