//! External interface: the interactive prompt, single-file execution, and
//! the three output modes (`l` token stream, `p` pretty AST, `e` eval
//! result). None of this is part of the interpreter's algorithmic core —
//! it is a thin collaborator wired on top of lexer/parser/evaluator.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::environment::Environment;
use crate::evaluator::Evaluator;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::token::TokenKind;

const PROMPT: &str = ">>";

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Lex,
    Parse,
    Eval,
}

impl Mode {
    pub fn from_flag(flag: &str) -> Option<Mode> {
        match flag {
            "l" => Some(Mode::Lex),
            "p" => Some(Mode::Parse),
            "e" => Some(Mode::Eval),
            _ => None,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Eval
    }
}

/// Runs the interactive `>>` prompt until an empty line is read.
pub fn start(input: impl BufRead, mut out: impl Write, mode: Mode) {
    tracing::info!(?mode, "starting interactive prompt");
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}").ok();
        out.flush().ok();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        if line.trim().is_empty() {
            break;
        }
        run(&line, &mut out, mode);
    }
}

/// Runs a single source string through the selected mode and writes the
/// result to `out`.
pub fn run(source: &str, mut out: impl Write, mode: Mode) {
    match mode {
        Mode::Lex => print_tokens(source, &mut out),
        Mode::Parse => print_parsed(source, &mut out),
        Mode::Eval => print_evaluated(source, &mut out),
    }
}

fn print_tokens(source: &str, out: &mut impl Write) {
    let mut lexer = Lexer::new(source);
    loop {
        let tok = lexer.next_token();
        if tok.kind == TokenKind::Eof {
            break;
        }
        writeln!(out, "{tok}").ok();
    }
}

fn print_parsed(source: &str, out: &mut impl Write) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    if !parser.errors().is_empty() {
        print_parser_errors(out, parser.errors());
        return;
    }
    print_tree(out, &program);
}

fn print_evaluated(source: &str, out: &mut impl Write) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    if !parser.errors().is_empty() {
        tracing::warn!(count = parser.errors().len(), "parser reported errors");
        print_parser_errors(out, parser.errors());
        return;
    }
    let evaluator = Evaluator::new();
    let env = Environment::new();
    let result = evaluator.eval_program(&program, &env);
    writeln!(out, "{}", result.inspect()).ok();
}

fn print_parser_errors(out: &mut impl Write, errors: &[String]) {
    write!(out, "{}", MONKEY_FACE.yellow()).ok();
    writeln!(out, "Woops! We ran into some monkey business here!").ok();
    writeln!(out, "Parser errors:").ok();
    for msg in errors {
        writeln!(out, "\t{msg}").ok();
    }
}

// ---------------------------------------------------------------------
// Colorized indented tree printer (`p` mode, clean parse).
// ---------------------------------------------------------------------

struct TreeNode {
    label: String,
    children: Vec<(&'static str, TreeNode)>,
}

fn leaf(label: String) -> TreeNode {
    TreeNode { label, children: Vec::new() }
}

fn program_tree(program: &Program) -> TreeNode {
    TreeNode {
        label: "Program".bright_red().to_string(),
        children: program
            .statements
            .iter()
            .map(|s| ("statements", statement_tree(s)))
            .collect(),
    }
}

fn statement_tree(stmt: &Statement) -> TreeNode {
    match stmt {
        Statement::Let(s) => TreeNode {
            label: "LetStatement".bright_cyan().to_string(),
            children: vec![
                ("name", leaf(identifier_label(&s.name.name))),
                ("value", expression_tree(&s.value)),
            ],
        },
        Statement::Return(s) => TreeNode {
            label: "ReturnStatement".bright_cyan().to_string(),
            children: vec![("value", expression_tree(&s.value))],
        },
        Statement::Expression(s) => TreeNode {
            label: "ExpressionStatement".bright_cyan().to_string(),
            children: vec![("expression", expression_tree(&s.expr))],
        },
        Statement::Block(block) => block_tree(block),
    }
}

fn block_tree(block: &BlockStatement) -> TreeNode {
    TreeNode {
        label: "BlockStatement".bright_cyan().to_string(),
        children: block
            .statements
            .iter()
            .map(|s| ("statements", statement_tree(s)))
            .collect(),
    }
}

fn identifier_label(name: &str) -> String {
    format!(
        "{} ({}{}{})",
        "Identifier".bright_blue(),
        "'".yellow(),
        name.yellow(),
        "'".yellow()
    )
}

fn expression_tree(expr: &Expression) -> TreeNode {
    match expr {
        Expression::Identifier(ident) => leaf(identifier_label(&ident.name)),
        Expression::IntegerLiteral(value) => leaf(format!(
            "{} ({})",
            "IntegerLiteral".bright_green(),
            value.to_string().yellow()
        )),
        Expression::Boolean(value) => leaf(format!(
            "{} ({})",
            "Boolean".bright_green(),
            value.to_string().yellow()
        )),
        Expression::Prefix(expr) => TreeNode {
            label: format!(
                "{} ('{}')",
                "PrefixExpression".bright_magenta(),
                expr.op.yellow()
            ),
            children: vec![("right", expression_tree(&expr.right))],
        },
        Expression::Infix(expr) => TreeNode {
            label: format!(
                "{} ('{}')",
                "InfixExpression".bright_magenta(),
                expr.op.yellow()
            ),
            children: vec![
                ("left", expression_tree(&expr.left)),
                ("right", expression_tree(&expr.right)),
            ],
        },
        Expression::If(expr) => {
            let mut children = vec![
                ("condition", expression_tree(&expr.condition)),
                ("consequence", block_tree(&expr.consequence)),
            ];
            if let Some(alt) = &expr.alternative {
                children.push(("alternative", block_tree(alt)));
            }
            TreeNode { label: "IfExpression".yellow().to_string(), children }
        }
        Expression::Function(expr) => {
            let mut children: Vec<(&'static str, TreeNode)> = expr
                .params
                .iter()
                .map(|p| ("params", leaf(identifier_label(&p.name))))
                .collect();
            children.push(("body", block_tree(&expr.body)));
            TreeNode { label: "FunctionLiteral".yellow().to_string(), children }
        }
        Expression::Call(expr) => {
            let mut children = vec![("function", expression_tree(&expr.function))];
            for arg in &expr.args {
                children.push(("args", expression_tree(arg)));
            }
            TreeNode { label: "CallExpression".yellow().to_string(), children }
        }
    }
}

fn print_tree(out: &mut impl Write, program: &Program) {
    let tree = program_tree(program);
    write_line(out, &tree.label, "", "");
    write_children(out, &tree.children, "");
}

fn write_line(out: &mut impl Write, label: &str, indent: &str, name: &str) {
    let prefix = if name.is_empty() {
        String::new()
    } else {
        format!("{}: ", name.truecolor(120, 120, 120))
    };
    writeln!(out, "{indent}{prefix}{label}").ok();
}

fn write_children(out: &mut impl Write, children: &[(&'static str, TreeNode)], indent: &str) {
    for (i, (name, child)) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let symbol = if is_last { "\u{2514}\u{2500}\u{2500}\u{2500}" } else { "\u{251c}\u{2500}\u{2500}\u{2500}" };
        let new_indent = if is_last {
            format!("{indent}    ")
        } else {
            format!("{indent}\u{2502}   ")
        };
        write_line(out, &child.label, &format!("{indent}{symbol}"), name);
        write_children(out, &child.children, &new_indent);
    }
}
