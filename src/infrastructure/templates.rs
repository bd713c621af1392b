//! HTML 模板

use minijinja::Environment;
use serde::Serialize;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// 启动时加载的模板集合，`.html` 模板默认开启 HTML 转义
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn load() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("index.html", INDEX_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
