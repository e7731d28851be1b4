use std::ops::RangeInclusive;

use proc_macro2::TokenStream;
use syn::spanned::Spanned as _;
use syn::{Error, Expr, ExprRange, RangeLimits, Result, Stmt};

use crate::error::abort;

/// Parse an arity range such as `0..=12` or `1..N + 1` with constant bounds.
pub fn parse_arity_range(tokens: TokenStream) -> Result<RangeInclusive<usize>> {
    let span = tokens.span();
    let expr = syn::parse2::<Expr>(tokens)?;
    let Some(range) = evaluate_range(&expr) else {
        abort!(expr, "expected a range of arities");
    };
    let min = match &range.start {
        Some(start) => match evaluate_usize(start) {
            Some(min) => min,
            None => abort!(start, "invalid start"),
        },
        None => 0,
    };
    let Some(end) = &range.end else {
        return Err(Error::new(span, "range cannot be unbounded at end"));
    };
    let max = match range.limits {
        RangeLimits::HalfOpen(_) => evaluate_usize(end).and_then(|end| end.checked_sub(1)),
        RangeLimits::Closed(_) => evaluate_usize(end),
    };
    let Some(max) = max else {
        abort!(end, "invalid end");
    };
    if max < min {
        abort!(range, "nothing to expand");
    }
    Ok(min..=max)
}

pub fn evaluate_range(expr: &Expr) -> Option<&ExprRange> {
    match expr {
        Expr::Block(block) => {
            if block.block.stmts.len() == 1 {
                if let Stmt::Expr(expr, _) = &block.block.stmts[0] {
                    return evaluate_range(expr);
                }
            }
        }
        Expr::Paren(expr) => {
            return evaluate_range(&expr.expr);
        }
        Expr::Range(range) => {
            return Some(range);
        }
        _ => {}
    }
    None
}

pub fn evaluate_usize(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Block(block) => {
            if block.block.stmts.len() == 1 {
                if let Stmt::Expr(expr, _) = &block.block.stmts[0] {
                    return evaluate_usize(expr);
                }
            }
        }
        Expr::Lit(literal) => {
            if let syn::Lit::Int(int) = &literal.lit {
                return int.base10_parse().ok();
            }
        }
        Expr::Binary(binary) => {
            let left = evaluate_usize(&binary.left)?;
            let right = evaluate_usize(&binary.right)?;
            return match binary.op {
                syn::BinOp::Add(_) => left.checked_add(right),
                syn::BinOp::Sub(_) => left.checked_sub(right),
                syn::BinOp::Mul(_) => left.checked_mul(right),
                syn::BinOp::Div(_) => left.checked_div(right),
                syn::BinOp::Rem(_) => left.checked_rem(right),
                _ => None,
            };
        }
        Expr::Paren(expr) => {
            return evaluate_usize(&expr.expr);
        }
        _ => {}
    }
    None
}
