use crate::{
    ast::{Expression, Factor, Operator, Term, Value},
    error::RuntimeFault,
    interpreter::value::RuntimeValue,
};

/// Walks syntax trees and computes runtime values.
///
/// The evaluator owns no interpreter state beyond the faults raised by the
/// current statement; trees carry everything else. Operators are applied
/// left to right exactly as the extension-pair lists encode them, with no
/// re-association and no precedence recomputation.
///
/// A faulting operator application yields an absent result (`None`) instead
/// of aborting the tree walk: the absent value becomes the running left
/// operand for any further chained operators, which then fault again. The
/// resulting cascade of diagnostics for a single statement is intentional
/// and observable. Faults accumulate on the evaluator and are drained by the
/// dispatcher after each statement.
pub struct Evaluator {
    faults: Vec<RuntimeFault>,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates a new evaluator with no pending faults.
    #[must_use]
    pub fn new() -> Self {
        Self { faults: Vec::new() }
    }

    /// Evaluates an expression node.
    ///
    /// The leftmost term is evaluated first; each `(operator, term)`
    /// extension pair then folds into the running result, left to right.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(RuntimeValue)` on success, or `None` if any operator
    /// application along the spine faulted.
    pub fn eval_expression(&mut self, expr: &Expression) -> Option<RuntimeValue> {
        let mut result = self.eval_term(&expr.left);
        for (op, term) in &expr.rest {
            let right = self.eval_term(term);
            result = self.apply_binary(*op, result, right);
        }
        result
    }

    /// Evaluates a term node, folding its factor-level extension pairs the
    /// same way [`Evaluator::eval_expression`] folds term-level pairs.
    pub fn eval_term(&mut self, term: &Term) -> Option<RuntimeValue> {
        let mut result = self.eval_factor(&term.left);
        for (op, factor) in &term.rest {
            let right = self.eval_factor(factor);
            result = self.apply_binary(*op, result, right);
        }
        result
    }

    /// Evaluates a factor by evaluating the value it wraps.
    pub fn eval_factor(&mut self, factor: &Factor) -> Option<RuntimeValue> {
        self.eval_value(&factor.value)
    }

    /// Evaluates an atomic value.
    ///
    /// Number literals are already in the `f64` domain. Text literals lose
    /// their delimiting quotes and nothing else. A grouping recurses into
    /// the full expression rule.
    pub fn eval_value(&mut self, value: &Value) -> Option<RuntimeValue> {
        match value {
            Value::Number(n) => Some(RuntimeValue::Number(*n)),
            Value::Text(raw) => Some(RuntimeValue::from_text_literal(raw)),
            Value::Grouping(expr) => self.eval_expression(expr),
        }
    }

    /// Applies one binary operator to the running result and a fresh
    /// right-hand value.
    ///
    /// Both operands must be numbers. A text operand, or an operand already
    /// absent from an earlier fault, raises a type fault and yields an
    /// absent result for this step; the walk continues. Division follows
    /// IEEE-754, so a zero divisor produces an infinity or NaN, never a
    /// fault.
    fn apply_binary(&mut self,
                    op: Operator,
                    left: Option<RuntimeValue>,
                    right: Option<RuntimeValue>)
                    -> Option<RuntimeValue> {
        let operands = left.as_ref()
                           .and_then(RuntimeValue::as_number)
                           .zip(right.as_ref().and_then(RuntimeValue::as_number));
        let Some((left, right)) = operands else {
            self.faults.push(RuntimeFault::TextOperand { op });
            return None;
        };

        Some(RuntimeValue::Number(match op {
                                      Operator::Add => left + right,
                                      Operator::Sub => left - right,
                                      Operator::Mul => left * right,
                                      Operator::Div => left / right,
                                  }))
    }

    /// Drains and returns the faults raised since the last call.
    ///
    /// The dispatcher calls this once per statement to turn accumulated
    /// faults into diagnostics.
    pub fn take_faults(&mut self) -> Vec<RuntimeFault> {
        std::mem::take(&mut self.faults)
    }
}
