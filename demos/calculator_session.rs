use calculat0r::{Equation, HistoryStack};
use log::info;

fn main() -> calculat0r::Result<()> {
    pretty_env_logger::init();

    let mut expressions: Vec<String> = std::env::args().skip(1).collect();
    if expressions.is_empty() {
        expressions = ["2+3*4", "2^3^2", "(12+3)*4-6/2", "4/0", "(2+3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    let mut history = HistoryStack::new();
    for text in expressions {
        let equation = Equation::new(text);
        if equation.balanced() {
            println!(
                "The equation is balanced and the answer is {:.3}",
                equation.answer()
            );
        } else {
            println!("The equation is not balanced but saved.");
        }
        history.push(equation);
    }

    println!("\n{}", history);

    let undone = history.undo()?.text().to_string();
    println!("Equation '{}' undone.", undone);
    let redone = history.redo()?.text().to_string();
    println!("Redoing equation '{}'.", redone);

    let oldest = history.get_equation(history.size())?;
    info!("Oldest equation: {}", oldest.text());

    println!("\n{}", history.render_latest()?);
    Ok(())
}
