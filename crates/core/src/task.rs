use crate::{Card, Param, RngState, Rule, TaskDef, CATALOG};

#[derive(Debug, Clone)]
pub struct ActiveTask {
    pub text: String,
    pub rule: Rule,
    pub params: Vec<Param>,
}

impl ActiveTask {
    pub fn roll(def: &TaskDef, rng: &mut RngState) -> ActiveTask {
        let params: Vec<Param> = def.params.iter().map(|spec| spec.resolve(rng)).collect();
        let rule = Rule::build(def.id, &params);
        let text = render_template(def.template, &params);
        ActiveTask { text, rule, params }
    }
}

pub fn select_task(rng: &mut RngState) -> ActiveTask {
    let def = rng.choose(CATALOG);
    ActiveTask::roll(def, rng)
}

pub fn render_template(template: &str, params: &[Param]) -> String {
    let mut text = template.to_string();
    for param in params {
        let placeholder = format!("{{{{{}}}}}", param.name);
        text = text.replace(&placeholder, &param.value.render());
    }
    text
}

pub fn evaluate(task: Option<&ActiveTask>, hand: &[Card]) -> bool {
    match task {
        Some(task) if !hand.is_empty() => task.rule.is_satisfied(hand),
        _ => false,
    }
}
