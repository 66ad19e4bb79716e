use std::{env, fs::read_to_string, process::exit, time::Instant};

use pixlc::{
    display_error, errors::errors::CompilerError, lexer::lexer::tokenize, parser::parser::parse,
    type_checker::type_checker::type_check,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut dump_tokens = false;
    let mut file_path: Option<&str> = None;
    for arg in args.iter().skip(1) {
        if arg == "--tokens" {
            dump_tokens = true;
        } else if file_path.is_none() {
            file_path = Some(arg.as_str());
        } else {
            eprintln!("Usage: pixlc [--tokens] <file>");
            exit(2);
        }
    }

    let file_path = match file_path {
        Some(file_path) => file_path,
        None => {
            eprintln!("Usage: pixlc [--tokens] <file>");
            exit(2);
        }
    };

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone()) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&CompilerError::from(error), &source, file_path);
            exit(1);
        }
    };

    if dump_tokens {
        for token in &tokens {
            token.debug();
        }
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&CompilerError::from(error), &source, file_path);
            exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    let check_start = Instant::now();
    let typed_program = match type_check(&program) {
        Ok(typed_program) => typed_program,
        Err(error) => {
            display_error(&CompilerError::from(error), &source, file_path);
            exit(1);
        }
    };

    println!("Type checked in {:?}", check_start.elapsed());
    println!("Total time: {:?}", start.elapsed());
    println!(
        "{}: {} top-level items, no errors",
        typed_program.name,
        typed_program.items.len()
    );
}
