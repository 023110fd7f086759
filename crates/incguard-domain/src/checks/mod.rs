use crate::model::HeaderModel;
use crate::policy::EffectiveConfig;
use crate::rule::RuleRegistry;
use incguard_types::Finding;

mod include_guard;
mod utils;


pub fn run_all(
    model: &HeaderModel,
    cfg: &EffectiveConfig,
    rules: &RuleRegistry,
    out: &mut Vec<Finding>,
) {
    include_guard::run(model, cfg, rules, out);
}
