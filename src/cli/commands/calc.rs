use crate::cli::keys::tokenize;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::codec;
use crate::core::history::HistoryLogic;
use crate::core::session::CalculationSession;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::color_tag::ColorTag;
use crate::models::key::Key;
use crate::models::theme::Theme;
use crate::ui::messages::{display, info, success, warning};

/// Drives one calculator session from text input and hands every entry
/// emitted by `=` to the history store.
pub(crate) struct KeypadRunner<'a> {
    pool: &'a DbPool,
    session: CalculationSession,
    label: Option<String>,
    save: bool,
    theme: Theme,
    show_trace: bool,
}

impl<'a> KeypadRunner<'a> {
    pub(crate) fn new(pool: &'a DbPool, cfg: &Config, theme: Theme, color: ColorTag) -> Self {
        Self {
            pool,
            session: CalculationSession::with_color(color),
            label: None,
            save: true,
            theme,
            show_trace: cfg.show_trace,
        }
    }

    pub(crate) fn label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    pub(crate) fn save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    pub(crate) fn restore(&mut self, id: &str) -> AppResult<()> {
        let row = HistoryLogic::restore(self.pool, &mut self.session, id)?;
        info(format!("Restored {} \"{}\"", row.short_id(), row.label));
        Ok(())
    }

    /// Press every key in `text`. Returns how many entries were emitted.
    pub(crate) fn feed(&mut self, text: &str) -> AppResult<usize> {
        let mut emitted = 0;
        for symbol in tokenize(text) {
            let Some(key) = Key::from_symbol(&symbol) else {
                warning(format!("Ignored unknown key '{symbol}'"));
                continue;
            };

            if let Some(mut entry) = self.session.handle_key(key) {
                emitted += 1;
                if self.save {
                    HistoryLogic::save(self.pool, &mut entry, self.label.as_deref())?;
                    success(format!("Saved {}  {}", entry.short_id(), entry.expression()));
                } else {
                    info(entry.expression());
                }
            }
        }
        Ok(emitted)
    }

    /// Numbered list of the committed steps, 1-based.
    pub(crate) fn print_steps(&self) {
        if self.session.ledger().is_empty() {
            info("No committed steps.");
            return;
        }
        for (i, step) in self.session.ledger().steps().iter().enumerate() {
            let op = step.operator.map(|o| o.symbol()).unwrap_or("");
            println!("{:>3}. {} {}", i + 1, codec::format(step.value), op);
        }
    }

    /// Drop step `position` (1-based) from the current calculation.
    pub(crate) fn remove_step(&mut self, position: usize) {
        let removed = position
            .checked_sub(1)
            .and_then(|index| self.session.remove_step(index));
        match removed {
            Some(step) => success(format!(
                "Removed step {position}: {}",
                codec::format(step.value)
            )),
            None => warning(format!("No step #{position}")),
        }
    }

    pub(crate) fn render(&self) {
        let trace = if self.show_trace {
            self.session.running_trace()
        } else {
            String::new()
        };
        display(self.theme, trace, self.session.current_display());
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, theme: Theme) -> AppResult<()> {
    if let Commands::Calc {
        keys,
        label,
        color,
        restore,
        no_save,
    } = cmd
    {
        let color = super::resolve_color(color.as_deref(), cfg)?;
        let pool = DbPool::open(&cfg.database)?;

        let mut runner = KeypadRunner::new(&pool, cfg, theme, color)
            .label(label.clone())
            .save(!*no_save);

        if let Some(id) = restore {
            runner.restore(id)?;
        }

        runner.feed(&keys.join(" "))?;
        runner.render();
    }
    Ok(())
}
