use std::io::{self, BufRead, Write};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(line) = lines.next() {
        match dice_eval::evaluate_dice(&line?) {
            Ok(r) => println!("{}", r),
            Err(why) => eprintln!("Error: {}", why),
        }
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}
