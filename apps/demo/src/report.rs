use crate::cli::{Cli, SetName};
use crate::config::ArgsConfig;
use anyhow::{Context, bail};
use std::fmt::Display;
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::info;
use vfab::{Slot, VariantSet};
use vfab_samples::checked::{CheckedFactory, CheckedKind};
use vfab_samples::pairs::{Pair, PairFactory, PairKind};
use vfab_samples::presets::{Preset, PresetFactory, PresetKind};

/// Builds the variant chosen by `cli` and writes the report to `out`.
///
/// The selector is read from `input` after a prompt when the command line does not carry one.
/// An unknown selector is reported, not treated as a failure.
///
/// # Errors
/// I/O failures, an unparsable selector or a constructor rejection from the checked set.
pub fn run(
    cli: &Cli,
    defaults: &ArgsConfig,
    mut input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    let selector = match cli.selector {
        Some(selector) => selector,
        None => prompt_selector(cli.set, &mut input, &mut out)?,
    };
    let (v1, v2) = (cli.v1.unwrap_or(defaults.v1), cli.v2.unwrap_or(defaults.v2));
    info!(set = %cli.set, selector, v1, v2, "Building variant");

    // Negative selectors name no position.
    let index = usize::try_from(selector).unwrap_or(usize::MAX);

    match cli.set {
        SetName::Pairs => {
            report(&mut out, selector, PairFactory.create(index, v1, v2), |pair| pair.render())
        }
        SetName::Presets => {
            report(&mut out, selector, PresetFactory.create(index), |preset| preset.render())
        }
        SetName::Checked => {
            let slot = CheckedFactory
                .create(index, v1, v2)
                .with_context(|| format!("building checked variant {selector}"))?;
            report(&mut out, selector, slot, |pair| pair.render())
        }
    }
}

fn prompt_selector(
    set: SetName,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<i64> {
    let choices = match set {
        SetName::Pairs => choices(PairKind::iter().map(|kind| (kind as usize, kind))),
        SetName::Presets => choices(PresetKind::iter().map(|kind| (kind as usize, kind))),
        SetName::Checked => choices(CheckedKind::iter().map(|kind| (kind as usize, kind))),
    };
    writeln!(out, "Input {choices}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no selector on standard input");
    }
    let line = line.trim();
    line.parse().with_context(|| format!("selector '{line}' is not an integer"))
}

fn choices<K: Display>(kinds: impl Iterator<Item = (usize, K)>) -> String {
    kinds.map(|(position, kind)| format!("{position} for {kind}")).collect::<Vec<_>>().join(", ")
}

fn report<S, R>(
    out: &mut impl Write,
    selector: i64,
    mut slot: Slot<S>,
    render: R,
) -> anyhow::Result<()>
where
    S: VariantSet,
    R: Fn(&S::Interface) -> String,
{
    writeln!(out, "isValid = {}", slot.is_valid())?;
    if !slot.is_valid() {
        writeln!(out, "no variant for selector {selector}")?;
        return Ok(());
    }

    let handle = slot.get_mut()?;
    writeln!(out, "{}", render(&*handle))?;
    show(out, &slot, &render)
}

fn show<S, R>(out: &mut impl Write, slot: &Slot<S>, render: &R) -> anyhow::Result<()>
where
    S: VariantSet,
    R: Fn(&S::Interface) -> String,
{
    writeln!(out, "{}", render(slot.get()?))?;
    Ok(())
}
