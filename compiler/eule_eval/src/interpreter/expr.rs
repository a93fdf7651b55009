//! Expressions.

use std::rc::Rc;

use eule_ir::{BinaryOp, Expr, LogicalOp, Name, TableEntry, UnaryOp};
use eule_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{type_mismatch, undefined_assignment, undefined_variable, unsupported};
use crate::value::lookup;
use crate::{
    evaluate_binary, evaluate_unary, Abrupt, Closure, EvalResult, ExprResult, Shared, Table,
    TableKey, Value,
};

/// A resolved assignment target.
///
/// Resolving evaluates the object and key of an index target exactly once,
/// so compound updates read and write the same slot.
enum Place {
    Variable(Name),
    Slot { table: Shared<Table>, key: TableKey },
}

/// Tag a fatal error with `line` and lift it into an expression result.
fn at_line<T>(result: EvalResult<T>, line: u32) -> Result<T, Abrupt> {
    result.map_err(|error| Abrupt::Error(error.at_line(line)))
}

fn expect_table(value: Value, operation: &str) -> EvalResult<Shared<Table>> {
    match value {
        Value::Table(table) => Ok(table),
        other => Err(type_mismatch(operation, other.type_name())),
    }
}

impl Interpreter {
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> ExprResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> ExprResult {
        match expr {
            Expr::Empty | Expr::Nihil => Ok(Value::Nihil),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::String(s) => Ok(Value::String(Rc::clone(s))),
            Expr::Identifier { name, line } => match self.env.lookup(name) {
                Some(value) => Ok(value),
                None => Err(undefined_variable(name).at_line(*line).into()),
            },
            Expr::Assign {
                target,
                value,
                line,
            } => {
                let place = self.resolve_place(target, *line)?;
                let value = self.eval_expr(value)?;
                at_line(self.write_place(place, value.clone()), *line)?;
                Ok(value)
            }
            Expr::CompoundAssign {
                op,
                target,
                value,
                line,
            } => {
                let place = self.resolve_place(target, *line)?;
                let current = at_line(self.read_place(&place), *line)?;
                let rhs = self.eval_expr(value)?;
                self.update_place(place, *op, &current, &rhs, *line)
            }
            Expr::Update { op, target, line } => {
                let place = self.resolve_place(target, *line)?;
                let current = at_line(self.read_place(&place), *line)?;
                self.update_place(place, op.binary(), &current, &Value::Number(1.0), *line)
            }
            Expr::Prefix { op, operand, line } => {
                if *op == UnaryOp::Yield {
                    return Err(unsupported("'yield'").at_line(*line).into());
                }
                let operand = self.eval_expr(operand)?;
                at_line(evaluate_unary(*op, &operand), *line)
            }
            Expr::Infix {
                op,
                left,
                right,
                line,
            } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                at_line(evaluate_binary(*op, &left, &right), *line)
            }
            Expr::Logical { op, left, right } => {
                let left = self.eval_expr(left)?;
                let short_circuit = match op {
                    LogicalOp::And => !left.is_truthy(),
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::Coalesce => !matches!(left, Value::Nihil),
                };
                if short_circuit {
                    Ok(left)
                } else {
                    self.eval_expr(right)
                }
            }
            Expr::Call { callee, args, line } => {
                let callee = self.eval_expr(callee)?;
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_expr(arg)?);
                }
                self.call(&callee, values, *line)
            }
            Expr::Index { object, key, line } => {
                let object = self.eval_expr(object)?;
                let key = self.eval_expr(key)?;
                let table = at_line(expect_table(object, "indexing"), *line)?;
                let key = at_line(TableKey::from_value(&key), *line)?;
                Ok(lookup(&table, &key))
            }
            Expr::ProtoTable { proto, table, line } => {
                let proto = self.eval_expr(proto)?;
                let proto = at_line(expect_table(proto, "prototype"), *line)?;
                let mut built = Table::with_proto(proto);
                self.fill_entries(&mut built, table)?;
                Ok(Value::table(built))
            }
            Expr::Table { pairs, array } => {
                let mut built = Table::new();
                for element in array {
                    built.push(self.eval_expr(element)?);
                }
                self.fill_entries(&mut built, pairs)?;
                Ok(Value::table(built))
            }
            Expr::Function(function) => Ok(Value::Closure(Rc::new(Closure {
                name: None,
                function: Rc::clone(function),
                env: self.env.current_scope(),
            }))),
        }
    }

    /// Evaluate `key: value` entries in order into `table`.
    fn fill_entries(&mut self, table: &mut Table, entries: &[TableEntry]) -> Result<(), Abrupt> {
        for entry in entries {
            let key = self.eval_expr(&entry.key)?;
            let key = TableKey::from_value(&key)?;
            let value = self.eval_expr(&entry.value)?;
            table.set(key, value)?;
        }
        Ok(())
    }

    fn resolve_place(&mut self, target: &Expr, line: u32) -> Result<Place, Abrupt> {
        match target {
            Expr::Identifier { name, .. } => Ok(Place::Variable(Rc::clone(name))),
            Expr::Index { object, key, .. } => {
                let object = self.eval_expr(object)?;
                let key = self.eval_expr(key)?;
                let table = at_line(expect_table(object, "index assignment"), line)?;
                let key = at_line(TableKey::from_value(&key), line)?;
                Ok(Place::Slot { table, key })
            }
            _ => Err(unsupported("assignment to this expression")
                .at_line(line)
                .into()),
        }
    }

    fn read_place(&self, place: &Place) -> EvalResult<Value> {
        match place {
            Place::Variable(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| undefined_variable(name)),
            Place::Slot { table, key } => Ok(lookup(table, key)),
        }
    }

    fn write_place(&mut self, place: Place, value: Value) -> EvalResult<()> {
        match place {
            Place::Variable(name) => {
                if self.env.assign(&name, value) {
                    Ok(())
                } else {
                    Err(undefined_assignment(&name))
                }
            }
            Place::Slot { table, key } => table.borrow_mut().set(key, value),
        }
    }

    /// Store `current op rhs` into `place` and yield it.
    fn update_place(
        &mut self,
        place: Place,
        op: BinaryOp,
        current: &Value,
        rhs: &Value,
        line: u32,
    ) -> ExprResult {
        let updated = at_line(evaluate_binary(op, current, rhs), line)?;
        at_line(self.write_place(place, updated.clone()), line)?;
        Ok(updated)
    }
}
