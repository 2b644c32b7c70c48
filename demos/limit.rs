use neuralmath::prelude::Engine;

fn main() {
    let engine = Engine::new();
    let cases = [
        ("sin(x)/x", "0"),
        ("(1+1/x)^x", "inf"),
        ("x^2 + 1", "3"),
        ("(1-cos(x))/x^2", "0"),
    ];

    for (expr, approach) in cases {
        match engine.evaluate_limit(expr, "x", approach) {
            Ok(answer) => println!("lim(x→{approach}) {expr} = {} ({:?})", answer.value, answer.kind),
            Err(err) => eprintln!("lim(x→{approach}) {expr}: {err}"),
        }
    }
}
