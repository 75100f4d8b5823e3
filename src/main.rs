use std::{env, fs::read_to_string, path::PathBuf, rc::Rc};

use mfl::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let tokens = tokenize(file_contents, Some(String::from(file_name)));

    if tokens.is_err() {
        display_error(tokens.err().unwrap(), PathBuf::from(file_path));
        std::process::exit(1);
    }

    let tree = parse(tokens.unwrap(), Rc::new(String::from(file_name)));

    if tree.is_err() {
        display_error(tree.err().unwrap(), PathBuf::from(file_path));
        std::process::exit(1);
    }

    print!("{}", tree.unwrap());
}
