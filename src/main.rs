use std::process::ExitCode;

use clap::Parser;

use numconvert::{Numeral, render_binary, render_decimal, render_hexadecimal};

const AFFIX_HELP: &str = "\
No prefix/postfix:
            to indicate a decimal value

Prefixes:
  0x or 0X, to indicate a hexadecimal value

Postfixes:
  b or B,   to indicate a binary value
  h or H,   to indicate a hexadecimal value";

#[derive(Parser)]
#[command(
    name = "numconvert",
    version,
    about = "Classify a numeral literal and print it in decimal, binary, and hexadecimal",
    after_help = AFFIX_HELP
)]
struct Cli {
    /// Numeral literal to convert: [prefix]<value>[postfix]
    value: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let numeral: Numeral = match cli.value.parse() {
        Ok(numeral) => numeral,
        Err(err) => {
            eprintln!("error: {err}\n\n{AFFIX_HELP}");
            return ExitCode::FAILURE;
        }
    };

    println!();
    print_section("Decimal", &render_decimal(numeral.value));
    print_section("Binary", &render_binary(numeral.value));
    print_section("Hexadecimal", &render_hexadecimal(numeral.value));
    println!();

    ExitCode::SUCCESS
}

fn print_section(title: &str, body: &str) {
    println!("{title}:");
    for line in body.lines() {
        println!("  {line}");
    }
}
