use anyhow::Context;
use zogue::repl;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let user = std::env::var("USER").unwrap_or_else(|_| String::from("stranger"));
    println!("Hello {}! This is the Zogue programming language!", user);
    println!("Feel free to type in commands");
    repl::start().context("repl terminated")?;
    Ok(())
}
