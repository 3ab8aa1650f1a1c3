use super::ui;
use crate::core::convert;
use crate::core::{ConversionRequest, RateProvider};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

/// Runs one interactive conversion: reads the base currency, target
/// currency, and amount, fetches the rate, prints the converted amount.
///
/// Input validation happens per line, so a bad currency code fails before
/// the next prompt and long before any network request.
pub async fn run<R, W>(mut input: R, mut output: W, provider: &dyn RateProvider) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let line = prompt_line(
        &mut input,
        &mut output,
        "Enter the base currency (e.g. INR, USD, EUR): ",
    )?;
    let Some(base) = convert::normalize_currency(&line) else {
        bail!("Base currency cannot be empty");
    };

    let line = prompt_line(
        &mut input,
        &mut output,
        "Enter the target currency (e.g. INR, USD, EUR): ",
    )?;
    let Some(target) = convert::normalize_currency(&line) else {
        bail!("Target currency cannot be empty");
    };

    let line = prompt_line(&mut input, &mut output, "Enter the amount to convert: ")?;
    let Some(amount) = convert::parse_amount(&line) else {
        bail!(
            "Invalid amount {:?}. Please enter a numeric value",
            line.trim()
        );
    };

    let request = ConversionRequest::new(base, target, amount);
    debug!(?request, "Fetching exchange rate");

    let rate = provider
        .fetch_rate(&request.base, &request.target)
        .await
        .context("Failed to retrieve a valid exchange rate")?;

    let converted = format!(
        "Converted amount: {:.2} {}",
        request.converted(rate),
        request.target
    );
    writeln!(output, "{}", ui::style_text(&converted, ui::StyleType::Value))?;

    Ok(())
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", ui::style_text(prompt, ui::StyleType::Prompt))?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    Ok(line)
}
