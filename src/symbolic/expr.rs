use crate::errors::{Result, RocketError};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Real,
    Positive,
}

/// A named scalar unknown. Two symbols are the same symbol when name and
/// domain agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    name: String,
    domain: Domain,
}

impl Symbol {
    pub fn real(name: &str) -> Self {
        Self {
            name: name.to_string(),
            domain: Domain::Real,
        }
    }

    pub fn positive(name: &str) -> Self {
        Self {
            name: name.to_string(),
            domain: Domain::Positive,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Expression tree over real scalars.
///
/// The arithmetic operators fold numeric constants and drop identities
/// (`x + 0`, `x * 1`, `--x`, and `x * 0` for atomic `x`), so trees built by hand and trees
/// produced by `diff`/`subs` compare equal when they are the same formula
/// written the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Symbol(Symbol),
    /// Undefined function applied to a symbol, e.g. `h(t)`
    Function { name: String, arg: Symbol },
    /// Unevaluated derivative of `expr` with respect to `var`
    Derivative { expr: Box<Expr>, var: Symbol },
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Ln(Box<Expr>),
}

impl Expr {
    pub fn function(name: &str, arg: &Symbol) -> Self {
        Expr::Function {
            name: name.to_string(),
            arg: arg.clone(),
        }
    }

    pub fn derivative(expr: Expr, var: &Symbol) -> Self {
        Expr::Derivative {
            expr: Box::new(expr),
            var: var.clone(),
        }
    }

    /// Natural logarithm. Positive constants are folded, anything else is
    /// kept unevaluated.
    pub fn ln(arg: Expr) -> Self {
        match arg {
            Expr::Number(x) if x > 0.0 => Expr::Number(x.ln()),
            other => Expr::Ln(Box::new(other)),
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            Expr::Symbol(_) | Expr::Function { .. } | Expr::Derivative { .. }
        )
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(x) => Some(*x),
            _ => None,
        }
    }

    pub fn depends_on(&self, var: &Symbol) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::Symbol(s) => s == var,
            Expr::Function { arg, .. } => arg == var,
            Expr::Derivative { expr, .. } => expr.depends_on(var),
            Expr::Neg(e) | Expr::Ln(e) => e.depends_on(var),
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) => {
                a.depends_on(var) || b.depends_on(var)
            }
        }
    }

    /// Symbolic derivative with respect to `var`. Functions of `var` turn
    /// into unevaluated `Derivative` nodes.
    pub fn diff(&self, var: &Symbol) -> Expr {
        if !self.depends_on(var) {
            return Expr::Number(0.0);
        }
        match self {
            Expr::Number(_) => Expr::Number(0.0),
            Expr::Symbol(_) => Expr::Number(1.0),
            Expr::Function { .. } | Expr::Derivative { .. } => Expr::derivative(self.clone(), var),
            Expr::Neg(e) => -e.diff(var),
            Expr::Add(a, b) => a.diff(var) + b.diff(var),
            Expr::Sub(a, b) => a.diff(var) - b.diff(var),
            Expr::Mul(a, b) => match (a.depends_on(var), b.depends_on(var)) {
                (true, false) => a.diff(var) * (**b).clone(),
                (false, true) => (**a).clone() * b.diff(var),
                _ => a.diff(var) * (**b).clone() + (**a).clone() * b.diff(var),
            },
            Expr::Div(a, b) => match (a.depends_on(var), b.depends_on(var)) {
                (true, false) => a.diff(var) / (**b).clone(),
                (false, true) => {
                    -((**a).clone() * b.diff(var)) / ((**b).clone() * (**b).clone())
                }
                _ => {
                    (a.diff(var) * (**b).clone() - (**a).clone() * b.diff(var))
                        / ((**b).clone() * (**b).clone())
                }
            },
            Expr::Ln(e) => e.diff(var) / (**e).clone(),
        }
    }

    /// Replaces every occurrence of `target` with `replacement`.
    pub fn subs(&self, target: &Expr, replacement: &Expr) -> Expr {
        if self == target {
            return replacement.clone();
        }
        match self {
            Expr::Number(_) | Expr::Symbol(_) | Expr::Function { .. } => self.clone(),
            Expr::Derivative { expr, var } => {
                Expr::derivative(expr.subs(target, replacement), var)
            }
            Expr::Neg(e) => -e.subs(target, replacement),
            Expr::Add(a, b) => a.subs(target, replacement) + b.subs(target, replacement),
            Expr::Sub(a, b) => a.subs(target, replacement) - b.subs(target, replacement),
            Expr::Mul(a, b) => a.subs(target, replacement) * b.subs(target, replacement),
            Expr::Div(a, b) => a.subs(target, replacement) / b.subs(target, replacement),
            Expr::Ln(e) => Expr::ln(e.subs(target, replacement)),
        }
    }

    pub fn eval(&self, bindings: &Bindings) -> Result<f64> {
        match self {
            Expr::Number(x) => Ok(*x),
            Expr::Symbol(_) | Expr::Function { .. } | Expr::Derivative { .. } => {
                bindings.lookup(self)
            }
            Expr::Neg(e) => Ok(-e.eval(bindings)?),
            Expr::Add(a, b) => Ok(a.eval(bindings)? + b.eval(bindings)?),
            Expr::Sub(a, b) => Ok(a.eval(bindings)? - b.eval(bindings)?),
            Expr::Mul(a, b) => Ok(a.eval(bindings)? * b.eval(bindings)?),
            Expr::Div(a, b) => {
                let numerator = a.eval(bindings)?;
                let denominator = b.eval(bindings)?;
                if denominator == 0.0 {
                    return Err(RocketError::Domain(format!("division by zero in {}", self)));
                }
                Ok(numerator / denominator)
            }
            Expr::Ln(e) => {
                let x = e.eval(bindings)?;
                if x <= 0.0 {
                    return Err(RocketError::Domain(format!(
                        "logarithm of non-positive value {}",
                        x
                    )));
                }
                Ok(x.ln())
            }
        }
    }

    /// Evaluates an expression without free symbols.
    pub fn evalf(&self) -> Result<f64> {
        self.eval(&Bindings::new())
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Neg(_) => 3,
            Expr::Number(x) if *x < 0.0 => 3,
            _ => 4,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parent: u8, strict: bool) -> fmt::Result {
        let prec = self.precedence();
        if prec < parent || (strict && prec == parent) {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }

    fn fmt_binary(
        f: &mut fmt::Formatter<'_>,
        a: &Expr,
        op: &str,
        b: &Expr,
        prec: u8,
    ) -> fmt::Result {
        a.fmt_operand(f, prec, false)?;
        write!(f, "{}", op)?;
        // Right operand of - and / needs parentheses at equal precedence
        b.fmt_operand(f, prec, op == " - " || op == "/")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(x) => write!(f, "{}", x),
            Expr::Symbol(s) => write!(f, "{}", s),
            Expr::Function { name, arg } => write!(f, "{}({})", name, arg),
            Expr::Derivative { expr, var } => write!(f, "d{}/d{}", expr, var),
            Expr::Neg(e) => {
                write!(f, "-")?;
                e.fmt_operand(f, 2, false)
            }
            Expr::Add(a, b) => Expr::fmt_binary(f, a, " + ", b, 1),
            Expr::Sub(a, b) => Expr::fmt_binary(f, a, " - ", b, 1),
            Expr::Mul(a, b) => Expr::fmt_binary(f, a, "*", b, 2),
            Expr::Div(a, b) => Expr::fmt_binary(f, a, "/", b, 2),
            Expr::Ln(e) => write!(f, "ln({})", e),
        }
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Number(value)
    }
}

impl From<Symbol> for Expr {
    fn from(symbol: Symbol) -> Self {
        Expr::Symbol(symbol)
    }
}

impl From<&Symbol> for Expr {
    fn from(symbol: &Symbol) -> Self {
        Expr::Symbol(symbol.clone())
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        match (self, rhs) {
            (Expr::Number(a), Expr::Number(b)) => Expr::Number(a + b),
            (Expr::Number(z), e) | (e, Expr::Number(z)) if z == 0.0 => e,
            (a, b) => Expr::Add(Box::new(a), Box::new(b)),
        }
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        match (self, rhs) {
            (Expr::Number(a), Expr::Number(b)) => Expr::Number(a - b),
            (e, Expr::Number(z)) if z == 0.0 => e,
            (Expr::Number(z), e) if z == 0.0 => -e,
            (a, b) => Expr::Sub(Box::new(a), Box::new(b)),
        }
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        match (self, rhs) {
            (Expr::Number(a), Expr::Number(b)) => Expr::Number(a * b),
            // A compound factor may still hold a domain error, keep it
            (Expr::Number(z), e) | (e, Expr::Number(z)) if z == 0.0 && e.is_atom() => {
                Expr::Number(0.0)
            }
            (Expr::Number(one), e) | (e, Expr::Number(one)) if one == 1.0 => e,
            (a, b) => Expr::Mul(Box::new(a), Box::new(b)),
        }
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        match (self, rhs) {
            (Expr::Number(a), Expr::Number(b)) if b != 0.0 => Expr::Number(a / b),
            (e, Expr::Number(one)) if one == 1.0 => e,
            (a, b) => Expr::Div(Box::new(a), Box::new(b)),
        }
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        match self {
            Expr::Number(x) => Expr::Number(-x),
            Expr::Neg(e) => *e,
            e => Expr::Neg(Box::new(e)),
        }
    }
}

/// Numeric values for the atoms of an expression, keyed by printed form.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<String, f64>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, atom: &Expr, value: f64) -> Result<()> {
        if !atom.is_atom() {
            return Err(RocketError::Domain(format!(
                "cannot bind a value to compound expression {}",
                atom
            )));
        }
        if let Expr::Symbol(symbol) = atom {
            if symbol.domain() == Domain::Positive && value <= 0.0 {
                return Err(RocketError::Domain(format!(
                    "{} is declared positive, got {}",
                    symbol, value
                )));
            }
        }
        self.values.insert(atom.to_string(), value);
        Ok(())
    }

    pub fn with(mut self, atom: &Expr, value: f64) -> Result<Self> {
        self.bind(atom, value)?;
        Ok(self)
    }

    fn lookup(&self, atom: &Expr) -> Result<f64> {
        let key = atom.to_string();
        self.values
            .get(&key)
            .copied()
            .ok_or(RocketError::UnboundSymbol(key))
    }
}
