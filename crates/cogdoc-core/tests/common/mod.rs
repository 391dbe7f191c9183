#![allow(dead_code)]

use std::sync::Arc;

use cogdoc_model::{Command, Document, Group};

pub fn add_command() -> Command {
    Command::new("add", "adds two numbers")
        .with_parameters(["a", "b"])
        .with_example("add 2 3")
        .with_usage("add <a> <b>")
}

/// The single-group "Math" document.
pub fn math_doc() -> Document {
    Document::new(vec![Group::new("Math", vec![add_command()])])
}

pub fn math_doc_without_usage() -> Document {
    let mut command = add_command();
    command.usage = None;
    Document::new(vec![Group::new("Math", vec![command])])
}

/// Several groups, one with spaces in names and one command lacking an example.
pub fn tools_doc() -> Arc<Document> {
    Arc::new(Document::new(vec![
        Group::new("Math", vec![add_command(), Command::new("sub", "subtracts")]),
        Group::new(
            "Text Tools",
            vec![
                Command::new("upper case", "shouts")
                    .with_parameters(["text"])
                    .with_example("upper case hi"),
            ],
        ),
    ]))
}
