//! Tree-walking evaluator: `eval(node, env)` never fails to produce an
//! `Object` — runtime failures are `Error` values, not exceptions, and
//! propagate by being checked after every sub-evaluation.
//!
//! `Evaluator` owns the three canonical singletons (`NULL`, `TRUE`,
//! `FALSE`) for one interpreter instance; boolean/null equality is
//! `Rc::ptr_eq` on these, which is what makes `==`/`!=` on booleans correct
//! without a dedicated arithmetic case.

use std::rc::Rc;

use crate::ast::*;
use crate::environment::Environment;
use crate::object::Object;

pub struct Evaluator {
    null: Rc<Object>,
    tru: Rc<Object>,
    fals: Rc<Object>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            null: Rc::new(Object::Null),
            tru: Rc::new(Object::Boolean(true)),
            fals: Rc::new(Object::Boolean(false)),
        }
    }

    fn native_bool(&self, value: bool) -> Rc<Object> {
        if value {
            Rc::clone(&self.tru)
        } else {
            Rc::clone(&self.fals)
        }
    }

    fn error(message: impl Into<String>) -> Rc<Object> {
        Rc::new(Object::Error(message.into()))
    }

    pub fn eval_program(&self, program: &Program, env: &Environment) -> Rc<Object> {
        let mut result = Rc::clone(&self.null);
        for stmt in &program.statements {
            result = self.eval_statement(stmt, env);
            match result.as_ref() {
                Object::ReturnValue(value) => return Rc::clone(value),
                Object::Error(_) => return result,
                _ => {}
            }
        }
        result
    }

    fn eval_block_statement(&self, block: &BlockStatement, env: &Environment) -> Rc<Object> {
        let mut result = Rc::clone(&self.null);
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env);
            if matches!(result.as_ref(), Object::ReturnValue(_) | Object::Error(_)) {
                return result;
            }
        }
        result
    }

    fn eval_statement(&self, stmt: &Statement, env: &Environment) -> Rc<Object> {
        match stmt {
            Statement::Expression(s) => self.eval_expression(&s.expr, env),
            Statement::Block(block) => self.eval_block_statement(block, env),
            Statement::Return(s) => {
                let value = self.eval_expression(&s.value, env);
                if value.is_error() {
                    return value;
                }
                Rc::new(Object::ReturnValue(value))
            }
            Statement::Let(s) => {
                let value = self.eval_expression(&s.value, env);
                if value.is_error() {
                    return value;
                }
                env.set(s.name.name.clone(), value);
                Rc::clone(&self.null)
            }
        }
    }

    fn eval_expression(&self, expr: &Expression, env: &Environment) -> Rc<Object> {
        match expr {
            Expression::IntegerLiteral(value) => Rc::new(Object::Integer(*value)),
            Expression::Boolean(value) => self.native_bool(*value),
            Expression::Identifier(ident) => self.eval_identifier(ident, env),
            Expression::Prefix(expr) => {
                let right = self.eval_expression(&expr.right, env);
                if right.is_error() {
                    return right;
                }
                self.eval_prefix_expression(&expr.op, &right)
            }
            Expression::Infix(expr) => {
                let left = self.eval_expression(&expr.left, env);
                if left.is_error() {
                    return left;
                }
                let right = self.eval_expression(&expr.right, env);
                if right.is_error() {
                    return right;
                }
                self.eval_infix_expression(&expr.op, &left, &right)
            }
            Expression::If(expr) => self.eval_if_expression(expr, env),
            Expression::Function(expr) => Rc::new(Object::Function(crate::object::FunctionObject {
                params: expr.params.clone(),
                body: expr.body.clone(),
                env: env.clone(),
            })),
            Expression::Call(expr) => self.eval_call_expression(expr, env),
        }
    }

    fn eval_identifier(&self, ident: &Identifier, env: &Environment) -> Rc<Object> {
        match env.get(&ident.name) {
            Some(value) => value,
            None => Self::error(format!("identifier not found: {}", ident.name)),
        }
    }

    fn eval_prefix_expression(&self, op: &str, right: &Rc<Object>) -> Rc<Object> {
        match op {
            "!" => self.native_bool(!self.is_truthy(right)),
            "-" => match right.as_ref() {
                Object::Integer(value) => Rc::new(Object::Integer(value.wrapping_neg())),
                other => Self::error(format!("unknown operator: -{}", other.type_name())),
            },
            _ => Self::error(format!("unknown operator: {op}{}", right.type_name())),
        }
    }

    fn eval_infix_expression(&self, op: &str, left: &Rc<Object>, right: &Rc<Object>) -> Rc<Object> {
        match (left.as_ref(), right.as_ref()) {
            (Object::Integer(l), Object::Integer(r)) => self.eval_integer_infix(op, *l, *r),
            _ if op == "==" => self.native_bool(Rc::ptr_eq(left, right)),
            _ if op == "!=" => self.native_bool(!Rc::ptr_eq(left, right)),
            _ if left.type_name() != right.type_name() => Self::error(format!(
                "type mismatch: {} {op} {}",
                left.type_name(),
                right.type_name()
            )),
            _ => Self::error(format!(
                "unknown operator: {} {op} {}",
                left.type_name(),
                right.type_name()
            )),
        }
    }

    fn eval_integer_infix(&self, op: &str, left: i64, right: i64) -> Rc<Object> {
        match op {
            "+" => Rc::new(Object::Integer(left.wrapping_add(right))),
            "-" => Rc::new(Object::Integer(left.wrapping_sub(right))),
            "*" => Rc::new(Object::Integer(left.wrapping_mul(right))),
            "/" => {
                if right == 0 {
                    Self::error("division by zero: INTEGER / INTEGER")
                } else {
                    Rc::new(Object::Integer(left.wrapping_div(right)))
                }
            }
            "<" => self.native_bool(left < right),
            ">" => self.native_bool(left > right),
            "==" => self.native_bool(left == right),
            "!=" => self.native_bool(left != right),
            _ => Self::error(format!("unknown operator: INTEGER {op} INTEGER")),
        }
    }

    fn eval_if_expression(&self, expr: &IfExpression, env: &Environment) -> Rc<Object> {
        let condition = self.eval_expression(&expr.condition, env);
        if condition.is_error() {
            return condition;
        }
        if self.is_truthy(&condition) {
            self.eval_block_statement(&expr.consequence, env)
        } else if let Some(alternative) = &expr.alternative {
            self.eval_block_statement(alternative, env)
        } else {
            Rc::clone(&self.null)
        }
    }

    fn eval_call_expression(&self, expr: &CallExpression, env: &Environment) -> Rc<Object> {
        let function = self.eval_expression(&expr.function, env);
        if function.is_error() {
            return function;
        }

        let mut args = Vec::with_capacity(expr.args.len());
        for arg in &expr.args {
            let value = self.eval_expression(arg, env);
            if value.is_error() {
                return value;
            }
            args.push(value);
        }

        self.apply_function(&function, &args)
    }

    fn apply_function(&self, function: &Rc<Object>, args: &[Rc<Object>]) -> Rc<Object> {
        let func = match function.as_ref() {
            Object::Function(func) => func,
            other => return Self::error(format!("not a function: {}", other.type_name())),
        };

        let call_env = Environment::enclosed(&func.env);
        for (param, arg) in func.params.iter().zip(args) {
            call_env.set(param.name.clone(), Rc::clone(arg));
        }

        let evaluated = self.eval_block_statement(&func.body, &call_env);
        match evaluated.as_ref() {
            Object::ReturnValue(value) => Rc::clone(value),
            _ => evaluated,
        }
    }

    /// `Null` and `False` are falsy; everything else, including
    /// `Integer(0)`, is truthy.
    fn is_truthy(&self, obj: &Rc<Object>) -> bool {
        !(Rc::ptr_eq(obj, &self.null) || Rc::ptr_eq(obj, &self.fals))
    }
}
