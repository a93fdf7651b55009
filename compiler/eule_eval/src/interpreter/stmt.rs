//! Declarations and statements.

use std::rc::Rc;

use eule_ir::{Block, Decl, Expr, Name, Stmt};
use tracing::trace;

use super::Interpreter;
use crate::completion::{normal_or_return, value_or_throw};
use crate::errors::{unsupported, EvalResult};
use crate::{Closure, Completion, ExecResult, Value};

/// What a loop does after one run of its body.
enum LoopStep {
    Next,
    Exit,
    /// Leave the loop and hand this completion to the enclosing statement.
    Propagate(Completion),
}

impl LoopStep {
    fn from_body(completion: Completion) -> Self {
        match completion {
            Completion::Normal(_) | Completion::Continue => LoopStep::Next,
            Completion::Break => LoopStep::Exit,
            other => LoopStep::Propagate(other),
        }
    }
}

impl Interpreter {
    pub(crate) fn exec_decl(&mut self, decl: &Decl) -> ExecResult {
        match decl {
            Decl::Error => Err(unsupported("a declaration that failed to parse")),
            Decl::Variable(bindings) => {
                for binding in bindings {
                    let value = value_or_throw!(self.eval_expr(&binding.init));
                    self.env.define(Rc::clone(&binding.name), value);
                }
                Ok(Completion::normal())
            }
            Decl::Function { name, function } => {
                let closure = Closure {
                    name: Some(Rc::clone(name)),
                    function: Rc::clone(function),
                    env: self.env.current_scope(),
                };
                self.env
                    .define(Rc::clone(name), Value::Closure(Rc::new(closure)));
                Ok(Completion::normal())
            }
            Decl::Stmt(stmt) => self.exec_stmt(stmt),
        }
    }

    /// Run `decls` in the current scope, stopping at the first abrupt
    /// completion.
    pub(crate) fn exec_decls(&mut self, decls: &[Decl]) -> ExecResult {
        for decl in decls {
            normal_or_return!(self.exec_decl(decl)?);
        }
        Ok(Completion::normal())
    }

    pub(crate) fn exec_stmt(&mut self, stmt: &Stmt) -> ExecResult {
        match stmt {
            Stmt::Empty => Ok(Completion::normal()),
            Stmt::Block(decls) => self.with_env_scope(|scoped| scoped.exec_decls(decls)),
            Stmt::If {
                init,
                cond,
                then_branch,
                else_branch,
            } => self.with_env_scope(|scoped| {
                if let Some(init) = init {
                    normal_or_return!(scoped.exec_decl(init)?);
                }
                let cond = value_or_throw!(scoped.eval_expr(cond));
                if cond.is_truthy() {
                    scoped.exec_stmt(then_branch)
                } else if let Some(otherwise) = else_branch {
                    scoped.exec_stmt(otherwise)
                } else {
                    Ok(Completion::normal())
                }
            }),
            Stmt::For {
                init,
                cond,
                post,
                body,
            } => self.with_env_scope(|scoped| {
                if let Some(init) = init {
                    normal_or_return!(scoped.exec_decl(init)?);
                }
                scoped.exec_for(cond, post, body)
            }),
            Stmt::While { cond, body } => self.exec_for(cond, &Expr::Empty, body),
            Stmt::DoWhile { body, cond } => self.exec_do_while(body, cond),
            Stmt::Continue { .. } => Ok(Completion::Continue),
            Stmt::Break { .. } => Ok(Completion::Break),
            Stmt::Throw { value } => {
                let value = value_or_throw!(self.eval_expr(value));
                trace!(value = %value, "throw");
                Ok(Completion::Throw(value))
            }
            Stmt::Try {
                body,
                catch,
                catch_binding,
                finally,
            } => self.exec_try(body, catch.as_ref(), catch_binding.as_ref(), finally.as_ref()),
            Stmt::Return { value } => {
                let value = value_or_throw!(self.eval_expr(value));
                Ok(Completion::Return(value))
            }
            Stmt::Expr(expr) => {
                let value = value_or_throw!(self.eval_expr(expr));
                Ok(Completion::Normal(value))
            }
        }
    }

    /// One run of a loop body in its own scope.
    fn loop_body(&mut self, body: &Stmt) -> EvalResult<LoopStep> {
        let completion = self.with_env_scope(|scoped| scoped.exec_stmt(body))?;
        Ok(LoopStep::from_body(completion))
    }

    /// `for` and `while`. An empty condition loops forever.
    fn exec_for(&mut self, cond: &Expr, post: &Expr, body: &Stmt) -> ExecResult {
        loop {
            if !matches!(cond, Expr::Empty) {
                let cond = value_or_throw!(self.eval_expr(cond));
                if !cond.is_truthy() {
                    break;
                }
            }
            match self.loop_body(body)? {
                LoopStep::Next => {}
                LoopStep::Exit => break,
                LoopStep::Propagate(completion) => return Ok(completion),
            }
            value_or_throw!(self.eval_expr(post));
        }
        Ok(Completion::normal())
    }

    /// `continue` in a do-while jumps to the condition.
    fn exec_do_while(&mut self, body: &Stmt, cond: &Expr) -> ExecResult {
        loop {
            match self.loop_body(body)? {
                LoopStep::Next => {}
                LoopStep::Exit => break,
                LoopStep::Propagate(completion) => return Ok(completion),
            }
            let cond = value_or_throw!(self.eval_expr(cond));
            if !cond.is_truthy() {
                break;
            }
        }
        Ok(Completion::normal())
    }

    /// A throw from the body runs `catch`; `finally` always runs and an
    /// abrupt completion from it replaces the pending one.
    fn exec_try(
        &mut self,
        body: &Block,
        catch: Option<&Block>,
        binding: Option<&Name>,
        finally: Option<&Block>,
    ) -> ExecResult {
        let mut completion = self.with_env_scope(|scoped| scoped.exec_decls(body))?;

        if let (Completion::Throw(thrown), Some(handler)) = (&completion, catch) {
            trace!(value = %thrown, "caught");
            let thrown = thrown.clone();
            completion = match binding {
                Some(name) => {
                    self.with_binding(Rc::clone(name), thrown, |scoped| {
                        scoped.exec_decls(handler)
                    })?
                }
                None => self.with_env_scope(|scoped| scoped.exec_decls(handler))?,
            };
        }

        if let Some(finally) = finally {
            let after = self.with_env_scope(|scoped| scoped.exec_decls(finally))?;
            if !matches!(after, Completion::Normal(_)) {
                return Ok(after);
            }
        }
        Ok(completion)
    }
}
