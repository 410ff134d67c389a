use std::{env, fs::read_to_string, process::exit};

use minilisp::{
    display_error,
    lexer::lexer::Lexer,
    parser::parser::parse,
    printer::{source::print_source, tree::TreePrinter},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: minilisp <file>");
        exit(1);
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let source = read_to_string(file_path).expect("Failed to read file!");

    let lexer = Lexer::new(source.clone(), Some(String::from(file_name)));
    let ast = match parse(lexer) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(error, &source);
            exit(1);
        }
    };

    println!("--- Pretty printed program ---");
    println!("{}", print_source(&ast));

    println!("\n--- AST ---");
    print!("{}", TreePrinter::new().print(&ast));
}
