//! Match expression evaluation.
//!
//! The evaluator drives an explicit state machine per match expression:
//! `Case(i)` tries the i-th case in declaration order; the first match
//! evaluates that case's body and moves to the terminal `Done` state
//! (first-match-wins, no fallthrough); exhausting the cases moves to
//! `Default`, which evaluates the default body exactly once. "No match"
//! is therefore never an error; the only hard failures are structural
//! (unknown extractor, malformed pattern node) or body-evaluation
//! failures.
//!
//! Match expressions are first-class: a case body may contain a nested
//! match whose subject is built from the current bindings, which is how
//! decode pipelines (base64 → JSON → deeper matching) compose. Nested
//! evaluation is re-entrant; subjects are freshly constructed values
//! with no aliasing back into the outer subject.

use tracing::trace;

use sieve_extract::{ExtractorRegistry, Record, Value};
use sieve_ir::{Case, CaseRange, ExprArena, ExprId, ExprKind, MatchId, StringInterner};

use crate::errors::{no_such_field, not_a_record, undefined_binding, EvalResult};
use crate::matcher::{matches, MatchContext, MatchOutcome};
use crate::stack::ensure_sufficient_stack;
use crate::{Environment, EvalError};

/// Evaluation states for one match expression.
enum MatchState {
    /// Trying the case at this index.
    Case(usize),
    /// All cases exhausted; the default body is next.
    Default,
    /// Terminal state carrying the result.
    Done(Value),
}

/// Evaluator for match expressions.
///
/// Borrows the arena, interner, and registry from the host runtime and
/// owns the binding environment for the duration of one evaluation. The
/// host pre-populates the environment's root scope with any outer
/// bindings; case bindings live in scopes pushed and popped around each
/// taken case.
pub struct Evaluator<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    registry: &'a ExtractorRegistry,
    env: Environment,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator with an empty environment.
    pub fn new(
        arena: &'a ExprArena,
        interner: &'a StringInterner,
        registry: &'a ExtractorRegistry,
    ) -> Self {
        Evaluator {
            arena,
            interner,
            registry,
            env: Environment::new(),
        }
    }

    /// Replace the environment (host-supplied outer bindings).
    #[must_use]
    pub fn with_env(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    /// The current environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Mutable access to the environment, for pre-populating bindings.
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    fn match_context(&self) -> MatchContext<'a> {
        MatchContext {
            arena: self.arena,
            interner: self.interner,
            registry: self.registry,
        }
    }

    /// Evaluate a match expression against an already-evaluated subject.
    ///
    /// This is the entry point for the host expression evaluator, which
    /// supplies the subject value per the collaborator contract. The
    /// match node's own subject expression is only evaluated for nested
    /// matches reached through case bodies.
    pub fn evaluate_match(&mut self, match_id: MatchId, subject: Value) -> EvalResult {
        let match_expr = self.arena.get_match(match_id);
        self.run_cases(match_expr.cases, match_expr.default_body, &subject)
    }

    /// The match state machine.
    fn run_cases(&mut self, cases: CaseRange, default_body: ExprId, subject: &Value) -> EvalResult {
        let case_list = self.arena.get_cases(cases);
        let mut state = MatchState::Case(0);
        loop {
            state = match state {
                MatchState::Case(index) => match case_list.get(index) {
                    Some(case) => match self.try_case(case, subject)? {
                        Some(result) => MatchState::Done(result),
                        None => MatchState::Case(index.saturating_add(1)),
                    },
                    None => MatchState::Default,
                },
                MatchState::Default => MatchState::Done(self.eval_expr(default_body)?),
                MatchState::Done(result) => return Ok(result),
            };
        }
    }

    /// Try one case: match, bind, check the guard, evaluate the body.
    ///
    /// `Ok(None)` means the case was skipped (pattern or guard); the
    /// scope pushed for the bindings is popped on every exit path.
    fn try_case(&mut self, case: &Case, subject: &Value) -> Result<Option<Value>, EvalError> {
        let outcome = matches(case.pattern, subject, &self.match_context())?;
        let MatchOutcome::Matched { value, bindings } = outcome else {
            return Ok(None);
        };

        self.env.push_scope();
        if let Some(binding) = case.binding {
            self.env.define(binding, value);
        }
        for (name, bound) in bindings {
            self.env.define(name, bound);
        }

        if let Some(guard) = case.guard {
            let guard_value = match self.eval_expr(guard) {
                Ok(v) => v,
                Err(e) => {
                    self.env.pop_scope();
                    return Err(e);
                }
            };
            if !guard_value.is_truthy() {
                trace!(case = %case.span, "guard rejected case");
                self.env.pop_scope();
                return Ok(None);
            }
        }

        let result = self.eval_expr(case.body);
        self.env.pop_scope();
        result.map(Some)
    }

    /// Evaluate a body expression.
    fn eval_expr(&mut self, expr: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| {
            let node = self.arena.get_expr(expr);
            match &node.kind {
                ExprKind::Null => Ok(Value::Null),
                ExprKind::Bool(b) => Ok(Value::Bool(*b)),
                ExprKind::Int(n) => Ok(Value::Int(*n)),
                ExprKind::Float(bits) => Ok(Value::Float(f64::from_bits(*bits))),
                ExprKind::Str(name) => Ok(Value::string(self.interner.lookup(*name))),
                ExprKind::Ident(name) => self.env.lookup(*name).ok_or_else(|| {
                    undefined_binding(self.interner.lookup(*name)).with_span(node.span)
                }),
                ExprKind::Field { base, field } => {
                    let base_value = self.eval_expr(*base)?;
                    let field_name = self.interner.lookup(*field);
                    match base_value.as_record() {
                        Some(record) => record
                            .get(field_name)
                            .cloned()
                            .ok_or_else(|| no_such_field(field_name).with_span(node.span)),
                        None => Err(not_a_record(base_value.type_name()).with_span(node.span)),
                    }
                }
                ExprKind::Record(entries) => {
                    let entry_list = self.arena.get_entries(*entries);
                    let mut record = Record::with_capacity(entry_list.len());
                    for entry in entry_list {
                        let value = self.eval_expr(entry.value)?;
                        record.insert(self.interner.lookup(entry.key).to_owned(), value);
                    }
                    Ok(Value::record(record))
                }
                ExprKind::List(range) => {
                    let ids = self.arena.get_expr_list(*range);
                    let mut items = Vec::with_capacity(ids.len());
                    for id in ids {
                        items.push(self.eval_expr(*id)?);
                    }
                    Ok(Value::list(items))
                }
                ExprKind::Match(match_id) => {
                    let nested = self.arena.get_match(*match_id);
                    let subject = self.eval_expr(nested.subject)?;
                    self.run_cases(nested.cases, nested.default_body, &subject)
                }
            }
        })
    }
}

/// Evaluate a match expression against an already-evaluated subject.
///
/// Single entry point for the host expression evaluator: the host
/// supplies the subject value and an environment carrying any outer
/// bindings, and consumes the result or propagates the error.
pub fn evaluate(
    arena: &ExprArena,
    interner: &StringInterner,
    registry: &ExtractorRegistry,
    match_id: MatchId,
    subject: Value,
    env: Environment,
) -> EvalResult {
    Evaluator::new(arena, interner, registry)
        .with_env(env)
        .evaluate_match(match_id, subject)
}
