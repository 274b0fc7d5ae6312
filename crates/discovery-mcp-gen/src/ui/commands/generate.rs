use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use discovery_mcp_gen::{
  Document, GenerateError, GenerateOptions, GenerationStats, Orchestrator, generator::GeneratedOutput,
};
use tokio::io::AsyncWriteExt;

use crate::ui::{Colors, DocumentInput, GenerateCommand, commands::load_document};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: DocumentInput,
  /// `None` writes to stdout.
  pub output: Option<PathBuf>,
  pub options: GenerateOptions,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      source,
      output,
      methods,
      module_name,
      prefix,
      type_prefix,
      schema,
      schema_order,
      strict_refs,
      verbose,
      quiet,
    } = command;

    let options = GenerateOptions::builder()
      .module_name(module_name)
      .maybe_tool_prefix(prefix)
      .type_prefix(type_prefix)
      .methods(methods.into_iter().map(|method| method.trim().to_string()).collect())
      .generate_schema(schema)
      .schema_order(schema_order.into())
      .strict_references(strict_refs)
      .build();

    Ok(Self {
      input: DocumentInput::try_from(source)?,
      output,
      options,
      verbose,
      quiet,
    })
  }

  async fn write_output(&self, code: &str) -> anyhow::Result<()> {
    let Some(path) = &self.output else {
      let mut stdout = tokio::io::stdout();
      stdout.write_all(code.as_bytes()).await?;
      stdout.flush().await?;
      return Ok(());
    };

    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, code).await?;
    Ok(())
  }
}

/// Progress reporting on stderr; stdout may carry the generated code.
struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      eprintln!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      eprintln!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    let verb = match self.config.input {
      DocumentInput::File(_) => "Loading",
      DocumentInput::Remote { .. } => "Fetching",
    };
    self.info(
      &format!("{verb} Discovery Document from: {}", self.config.input)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_loaded(&self, document: &Document) {
    self.info(
      &format!("Loaded: {} ({})", document.title, document.id)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating MCP tool bindings...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Operations converted:", stats.operations_converted.to_string());
    if self.config.options.generate_schema {
      self.stat("Schemas generated:", stats.schemas_generated.to_string());
    }
    self.stat("Fields generated:", stats.fields_generated.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_orphaned_schemas(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        eprintln!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  fn print_orphaned_schemas(&self, stats: &GenerationStats) {
    if stats.orphaned_schemas_count > 0 && self.config.verbose {
      self.stat("Unused schemas:", stats.orphaned_schemas_count.to_string());
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_lossy() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        eprintln!();
        printed_header = true;
      }

      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    if let Some(path) = &self.config.output {
      self.info(
        &format!("Writing to: {}", path.display())
          .with(self.colors.primary())
          .to_string(),
      );
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      eprintln!();
      eprintln!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated MCP tool bindings".with(self.colors.success())
      );
    }
  }

  fn log_syntax_error(&self, error: &GenerateError) {
    eprintln!(
      "{} {}",
      "Error:".with(self.colors.accent()),
      format!("{error}").with(self.colors.primary())
    );
    eprintln!(
      "{}",
      "The unformatted output follows on stdout for inspection.".with(self.colors.info())
    );
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = load_document(&config.input).await?;
  logger.log_loaded(&document);

  logger.log_generating();
  let orchestrator = Orchestrator::new(document, config.options.clone())?;

  let GeneratedOutput { code, stats } = match orchestrator.generate() {
    Ok(output) => output,
    Err(error) => {
      if let Some(unformatted) = error.unformatted() {
        logger.log_syntax_error(&error);
        let mut stdout = tokio::io::stdout();
        stdout.write_all(unformatted.as_bytes()).await?;
        stdout.flush().await?;
      }
      return Err(error.into());
    }
  };

  logger.print_statistics(&stats);
  logger.log_writing();
  config.write_output(&code).await?;

  logger.log_success();
  Ok(())
}
