use bank_statement_text_rs::{ParserBuilder, PostedTransaction};
use std::env;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let verbose = args.iter().filter(|a| a.as_str() == "-v").count();
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let file_path = args
        .iter()
        .find(|a| a.as_str() != "-v")
        .ok_or("usage: parse_text [-v] <pdftotext-output.txt>")?;

    let content = std::fs::read_to_string(file_path)?;
    let result = ParserBuilder::new().content(&content).parse();

    println!("Statement metadata:");
    for (key, value) in result.metadata.fields() {
        println!("  {}: {}", key, value);
    }
    println!();

    println!("Found {} transactions\n", result.transactions.len());

    for (i, tx) in result.transactions.iter().enumerate() {
        println!("Transaction {}:", i + 1);
        println!("  Date: {}", tx.transaction_date);
        println!("  Description: {}", tx.description);
        println!("  User: {}", tx.user_id);
        println!("  Debit: {}", tx.debit);
        println!("  Credit: {}", tx.credit);
        println!("  Balance: {}", tx.balance);

        match PostedTransaction::try_from(tx.clone()) {
            Ok(posted) => println!("  Net: {}", posted.net_amount()),
            Err(e) => println!("  Net: n/a ({})", e),
        }
        println!();
    }

    Ok(())
}
