use crate::compare::Comparison;
use crate::policy::EffectiveConfig;
use importguard_types::Finding;

mod undeclared;
mod unused;
mod utils;


pub fn run_all(comparison: &Comparison, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    undeclared::run(comparison, cfg, out);
    unused::run(comparison, cfg, out);
}
