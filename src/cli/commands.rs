//! Command dispatch for the contact form shell.

use dialoguer::{theme::ColorfulTheme, Input, Password};
use strsim::levenshtein;

use crate::config::FormConfig;
use crate::errors::CliError;
use crate::form::{
    AlertKind, FieldId, FormController, FormDocument, FormEvent, FormView, NavOutcome, Validity,
};

use super::output;
use super::render;

const SUGGESTION_DISTANCE: usize = 3;

const COMMANDS: &[(&str, &str)] = &[
    ("set", "set <field> <value...>  store a value and validate it"),
    ("blur", "blur <field>            validate a field as if it lost focus"),
    ("validate", "validate [field]        validate one field or the whole form"),
    ("wizard", "wizard on|off           toggle one-step-at-a-time mode"),
    ("next", "next                    advance to the next step"),
    ("prev", "prev                    go back to the previous step"),
    ("submit", "submit                  validate everything and show the banner"),
    ("show", "show                    render the visible form"),
    ("fill", "fill                    prompt for every visible field"),
    ("help", "help                    list commands"),
    ("exit", "exit                    leave the shell"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    form: FormController<FormDocument>,
}

impl ShellContext {
    pub fn new(mode: CliMode, config: &FormConfig) -> Result<Self, CliError> {
        let layout = config.layout()?;
        let mut form = FormController::new(FormDocument::new(&layout), layout);
        if config.wizard {
            form.handle_event(FormEvent::WizardToggle(true))?;
        }
        Ok(Self { mode, form })
    }

    pub fn form(&self) -> &FormController<FormDocument> {
        &self.form
    }

    pub fn command_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = COMMANDS.iter().map(|(name, _)| *name).collect();
        names.push("quit");
        names
    }

    pub fn prompt(&self) -> String {
        let wizard = self.form.wizard();
        if wizard.enabled {
            let layout = self.form.layout();
            let position = layout.position(wizard.current).map_or(0, |index| index + 1);
            format!("contact [step {}/{}]> ", position, layout.len())
        } else {
            "contact> ".to_string()
        }
    }

    pub fn report_error(&self, err: CliError) {
        output::error(err);
    }

    pub(crate) fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CliError> {
        match command {
            "set" => self.cmd_set(args)?,
            "blur" => self.cmd_blur(args)?,
            "validate" => self.cmd_validate(args),
            "wizard" => self.cmd_wizard(args)?,
            "next" => {
                let outcome = self.form.next()?;
                self.report_navigation(outcome);
            }
            "prev" => {
                let outcome = self.form.prev()?;
                self.report_navigation(outcome);
            }
            "submit" => self.cmd_submit()?,
            "show" => self.cmd_show(),
            "fill" => self.cmd_fill()?,
            "help" => self.cmd_help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            other => self.unknown_command(other),
        }
        Ok(LoopControl::Continue)
    }

    fn cmd_set(&mut self, args: &[&str]) -> Result<(), CliError> {
        let Some((name, rest)) = args.split_first() else {
            output::warning("Usage: set <field> <value...>");
            return Ok(());
        };
        let Some(field) = self.resolve_field(name) else {
            return Ok(());
        };
        self.input(field, rest.join(" "))
    }

    fn cmd_blur(&mut self, args: &[&str]) -> Result<(), CliError> {
        let Some(name) = args.first() else {
            output::warning("Usage: blur <field>");
            return Ok(());
        };
        if let Some(field) = self.resolve_field(name) {
            self.form.handle_event(FormEvent::Blur(field))?;
            self.report_field(field);
        }
        Ok(())
    }

    fn cmd_validate(&mut self, args: &[&str]) {
        if let Some(name) = args.first() {
            if let Some(field) = self.resolve_field(name) {
                self.form.validate_field(field);
                self.report_field(field);
            }
            return;
        }

        let valid = self.form.validate_all();
        for field in FieldId::ALL {
            self.report_field(field);
        }
        if valid {
            output::success("All fields valid.");
        } else {
            let failing = FieldId::ALL
                .into_iter()
                .filter(|field| self.form.view().validity(*field) != Validity::Valid)
                .count();
            output::warning(format!("{} field(s) need attention.", failing));
        }
    }

    fn cmd_wizard(&mut self, args: &[&str]) -> Result<(), CliError> {
        let enabled = match args.first().map(|arg| arg.to_ascii_lowercase()) {
            Some(arg) if arg == "on" => true,
            Some(arg) if arg == "off" => false,
            _ => {
                output::warning("Usage: wizard on|off");
                return Ok(());
            }
        };
        self.form.handle_event(FormEvent::WizardToggle(enabled))?;
        if enabled {
            output::info(format!(
                "Wizard mode enabled. Showing step 1 of {}.",
                self.form.layout().len()
            ));
        } else {
            output::info("Wizard mode disabled. All steps visible.");
        }
        Ok(())
    }

    fn cmd_submit(&mut self) -> Result<(), CliError> {
        self.form.handle_event(FormEvent::Submit)?;
        if let Some(alert) = self.form.view().alert() {
            match alert.kind {
                AlertKind::Success => output::success(&alert.message),
                AlertKind::Danger => output::error(&alert.message),
            }
        }
        Ok(())
    }

    fn cmd_show(&self) {
        output::section("Contact form");
        for line in render::form_lines(&self.form) {
            output::line(line);
        }
    }

    fn cmd_fill(&mut self) -> Result<(), CliError> {
        if self.mode == CliMode::Script {
            output::warning("`fill` is only available in interactive mode.");
            return Ok(());
        }
        let theme = ColorfulTheme::default();
        for field in self.visible_fields() {
            let value = if field.is_secret() {
                Password::with_theme(&theme)
                    .with_prompt(field.label())
                    .allow_empty_password(true)
                    .interact()?
            } else {
                let current = self.form.view().field_value(field);
                Input::<String>::with_theme(&theme)
                    .with_prompt(field.label())
                    .with_initial_text(current)
                    .allow_empty(true)
                    .interact_text()?
            };
            self.input(field, value)?;
        }
        Ok(())
    }

    fn cmd_help(&self) {
        output::section("Commands");
        for (_, usage) in COMMANDS {
            output::line(format!("  {}", usage));
        }
    }

    fn input(&mut self, field: FieldId, value: String) -> Result<(), CliError> {
        self.form.view_mut().set_value(field, value);
        self.form.handle_event(FormEvent::Input(field))?;
        self.report_field(field);
        Ok(())
    }

    fn visible_fields(&self) -> Vec<FieldId> {
        let document = self.form.view();
        self.form
            .layout()
            .steps()
            .iter()
            .filter(|step| document.is_step_visible(step.id))
            .flat_map(|step| step.fields.iter().copied())
            .collect()
    }

    fn report_field(&self, field: FieldId) {
        let document = self.form.view();
        let text = format!("{}: {}", field, document.help_text(field));
        if document.validity(field) == Validity::Valid {
            output::success(text);
        } else {
            output::warning(text);
        }
    }

    fn report_navigation(&self, outcome: NavOutcome) {
        match outcome {
            NavOutcome::Moved { to, .. } => output::success(format!("Moved to step {}.", to)),
            NavOutcome::Blocked { step, invalid } => {
                let names: Vec<&str> = invalid.iter().map(|field| field.as_str()).collect();
                output::warning(format!(
                    "Step {} has errors: {}.",
                    step,
                    names.join(", ")
                ));
                for field in invalid {
                    self.report_field(field);
                }
            }
            NavOutcome::Boundary => output::info("No further step in that direction."),
            NavOutcome::Inactive => output::warning("Enable wizard mode first (`wizard on`)."),
        }
    }

    fn resolve_field(&self, name: &str) -> Option<FieldId> {
        let found = FieldId::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name));
        if found.is_none() {
            let names: Vec<&str> = FieldId::ALL.iter().map(|field| field.as_str()).collect();
            warn_with_suggestion(&format!("Unknown field `{}`.", name), name, &names);
        }
        found
    }

    fn unknown_command(&self, command: &str) {
        let names = Self::command_names();
        warn_with_suggestion(&format!("Unknown command `{}`.", command), command, &names);
    }
}

fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let needle = input.to_ascii_lowercase();
    candidates
        .iter()
        .map(|candidate| (levenshtein(&needle, &candidate.to_ascii_lowercase()), *candidate))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

fn warn_with_suggestion(message: &str, input: &str, candidates: &[&str]) {
    match closest(input, candidates) {
        Some(candidate) => output::warning(format!("{} Did you mean `{}`?", message, candidate)),
        None => output::warning(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ShellContext {
        ShellContext::new(CliMode::Script, &FormConfig::default()).unwrap()
    }

    #[test]
    fn suggests_nearby_names() {
        assert_eq!(closest("emial", &["email", "phone"]), Some("email"));
        assert_eq!(closest("sbumit", &["submit", "show"]), Some("submit"));
        assert_eq!(closest("zzzzzzzz", &["email"]), None);
    }

    #[test]
    fn set_stores_multi_word_values() {
        let mut ctx = context();
        ctx.dispatch("set", &["comments", "hello", "there"]).unwrap();
        let group = ctx.form().view().group(FieldId::Comments);
        assert_eq!(group.value, "hello there");
        assert_eq!(group.help, "Looks good.");
    }

    #[test]
    fn wizard_config_starts_on_first_step() {
        let config = FormConfig {
            wizard: true,
            ..FormConfig::default()
        };
        let ctx = ShellContext::new(CliMode::Script, &config).unwrap();
        assert!(ctx.form().wizard().enabled);
        assert_eq!(ctx.prompt(), "contact [step 1/3]> ");
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut ctx = context();
        assert_eq!(ctx.dispatch("quit", &[]).unwrap(), LoopControl::Exit);
        assert_eq!(ctx.dispatch("show", &[]).unwrap(), LoopControl::Continue);
    }
}
