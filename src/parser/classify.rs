//! Streaming line classifier shared by all region strategies.
//!
//! A region supplies a `Grammar` (its predicates and policies); this module
//! owns the state machine. Per line, in priority order:
//! noise, open code block, preamble, boilerplate, structure marker, code
//! annotation, bullet, attached line, title, continuation.
//! A bullet line is never considered as a title.

use tracing::trace;

use super::codes::{scan_codes, CodeScan};
use super::config::TitleBounds;
use super::lines::{char_len, clean_domain_name, is_noise, strip_glyphs, BULLETS_AND_DASH, ROUND_BULLETS, STRIP_ALL};
use super::record::DomainDraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLine {
    pub name: String,
    pub codes: Vec<String>,
}

impl TitleLine {
    pub fn plain(name: &str) -> Self {
        TitleLine {
            name: name.to_string(),
            codes: Vec::new(),
        }
    }
}

/// What the title predicate may know about the record in progress.
#[derive(Debug, Clone, Copy)]
pub struct TitleContext {
    pub active: bool,
    pub active_has_description: bool,
    pub bounds: TitleBounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// New grouping label for records started from now on.
    Tier(String),
    /// Description lines of the active record start after this line.
    BeginBody,
    /// Close the active record if it has content. A bare title stays open
    /// and keeps collecting.
    Break,
}

#[derive(Clone, Copy)]
pub enum BulletMode {
    /// Bullet text is a description line of the active record.
    Append,
    /// Every bullet is a complete record of its own.
    Record(fn(&str) -> Option<DomainDraft>),
}

/// A header line followed by item lines carrying codes.
#[derive(Clone, Copy)]
pub struct CodeBlock {
    pub opens: fn(&str) -> bool,
    pub item: fn(&str) -> bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushRule {
    /// Keep a record only when it has description or codes.
    RequireContent,
    Always,
}

#[derive(Clone, Copy)]
pub struct Grammar {
    pub reject_garbage: bool,
    /// Lines before the first line matching this are ignored.
    pub preamble_exit: Option<fn(&str) -> bool>,
    pub skip: fn(&str) -> bool,
    pub marker: fn(&str) -> Option<Marker>,
    /// Returns the fragment holding the codes.
    pub annotation: fn(&str) -> Option<&str>,
    pub code_block: Option<CodeBlock>,
    pub bullets: &'static [char],
    pub strip: &'static [char],
    pub bullet_mode: BulletMode,
    /// Lines appended to an active record even when they look like titles.
    pub attach: fn(&str) -> bool,
    pub title: fn(&str, &TitleContext) -> Option<TitleLine>,
    /// Pulls inline codes out of description text.
    pub inline_codes: Option<fn(&str) -> (String, CodeScan)>,
    pub keep_continuation: bool,
    pub min_fragment_chars: usize,
    /// New records collect description only after a `Marker::BeginBody`.
    pub awaits_body: bool,
    pub flush: FlushRule,
    pub initial_tier: Option<&'static str>,
}

impl Grammar {
    /// Plain headers, round or dash bullets, nothing else.
    pub const BASE: Grammar = Grammar {
        reject_garbage: false,
        preamble_exit: None,
        skip: never,
        marker: no_marker,
        annotation: no_annotation,
        code_block: None,
        bullets: BULLETS_AND_DASH,
        strip: STRIP_ALL,
        bullet_mode: BulletMode::Append,
        attach: never,
        title: plain_title,
        inline_codes: None,
        keep_continuation: true,
        min_fragment_chars: 1,
        awaits_body: false,
        flush: FlushRule::RequireContent,
        initial_tier: None,
    };
}

pub fn never(_: &str) -> bool {
    false
}

pub fn no_marker(_: &str) -> Option<Marker> {
    None
}

pub fn no_annotation(_: &str) -> Option<&str> {
    None
}

pub fn no_title(_: &str, _: &TitleContext) -> Option<TitleLine> {
    None
}

/// Capitalized line inside the length window, not opening with a round bullet.
pub fn plain_title(line: &str, ctx: &TitleContext) -> Option<TitleLine> {
    looks_like_title(line, &ctx.bounds).then(|| TitleLine::plain(line))
}

pub fn looks_like_title(line: &str, bounds: &TitleBounds) -> bool {
    !line.starts_with(ROUND_BULLETS) && bounds.admits(line) && super::lines::starts_upper(line)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Heading,
    Body,
    Codes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierState {
    Idle,
    InPreamble,
    Accumulating { draft: DomainDraft, phase: Phase },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Noise,
    Boilerplate,
    Preamble,
    Marker,
    CodeAnnotation,
    Title,
    Bullet,
    Continuation,
    Discarded,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassifierOutput {
    pub drafts: Vec<DomainDraft>,
    pub malformed_tokens: Vec<String>,
}

pub struct LineClassifier<'g> {
    grammar: &'g Grammar,
    bounds: TitleBounds,
    state: ClassifierState,
    tier: Option<String>,
    out: ClassifierOutput,
}

impl<'g> LineClassifier<'g> {
    pub fn new(grammar: &'g Grammar, bounds: TitleBounds) -> Self {
        let state = if grammar.preamble_exit.is_some() {
            ClassifierState::InPreamble
        } else {
            ClassifierState::Idle
        };
        LineClassifier {
            grammar,
            bounds,
            state,
            tier: grammar.initial_tier.map(str::to_string),
            out: ClassifierOutput::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &ClassifierState {
        &self.state
    }

    pub fn feed(&mut self, raw: &str) -> LineRole {
        let g = self.grammar;
        let line = raw.trim();

        if is_noise(line, g.reject_garbage) {
            return LineRole::Noise;
        }

        if let Some(block) = g.code_block {
            if self.phase() == Some(Phase::Codes) {
                if (block.item)(line) {
                    let scan = scan_codes(line);
                    self.take_codes(scan);
                    return LineRole::CodeAnnotation;
                }
                // a repeated header keeps the block open
                if (block.opens)(line) {
                    return LineRole::CodeAnnotation;
                }
                // first line after the block ends the record
                self.emit_active();
            }
        }

        if self.state == ClassifierState::InPreamble {
            match g.preamble_exit {
                Some(exit) if exit(line) => self.state = ClassifierState::Idle,
                _ => return LineRole::Preamble,
            }
        }

        if (g.skip)(line) {
            return LineRole::Boilerplate;
        }

        if let Some(marker) = (g.marker)(line) {
            match marker {
                Marker::Tier(label) => self.tier = Some(label),
                Marker::BeginBody => self.set_phase(Phase::Body),
                Marker::Break => {
                    if self.draft().is_some_and(DomainDraft::has_content) {
                        self.emit_active();
                    }
                }
            }
            return LineRole::Marker;
        }

        if let Some(fragment) = (g.annotation)(line) {
            if self.is_active() {
                let scan = scan_codes(fragment);
                self.take_codes(scan);
                self.emit_active();
            }
            return LineRole::CodeAnnotation;
        }

        if let Some(block) = g.code_block {
            if (block.opens)(line) {
                self.set_phase(Phase::Codes);
                return LineRole::CodeAnnotation;
            }
        }

        if line.starts_with(g.bullets) {
            let text = strip_glyphs(line, g.strip);
            return match g.bullet_mode {
                BulletMode::Append => self.append(text, LineRole::Bullet),
                BulletMode::Record(build) => {
                    self.flush();
                    match build(text) {
                        Some(mut draft) => {
                            if draft.tier.is_none() {
                                draft.tier = self.tier.clone();
                            }
                            self.out.drafts.push(draft);
                            LineRole::Bullet
                        }
                        None => LineRole::Discarded,
                    }
                }
            };
        }

        if self.is_active() && (g.attach)(line) {
            return self.append(line, LineRole::Continuation);
        }

        let ctx = TitleContext {
            active: self.is_active(),
            active_has_description: self.draft().is_some_and(|d| !d.lines.is_empty()),
            bounds: self.bounds,
        };
        if let Some(title) = (g.title)(line, &ctx) {
            self.flush();
            let mut draft = DomainDraft::new(clean_domain_name(&title.name), self.tier.clone());
            draft.codes = title.codes;
            let phase = if g.awaits_body { Phase::Heading } else { Phase::Body };
            self.state = ClassifierState::Accumulating { draft, phase };
            return LineRole::Title;
        }

        if g.keep_continuation {
            return self.append(line, LineRole::Continuation);
        }
        LineRole::Discarded
    }

    /// Flush the active record (subject to the grammar's rule) and return
    /// everything collected.
    pub fn finish(mut self) -> ClassifierOutput {
        self.flush();
        self.out
    }

    fn is_active(&self) -> bool {
        matches!(self.state, ClassifierState::Accumulating { .. })
    }

    fn draft(&self) -> Option<&DomainDraft> {
        match &self.state {
            ClassifierState::Accumulating { draft, .. } => Some(draft),
            _ => None,
        }
    }

    fn phase(&self) -> Option<Phase> {
        match &self.state {
            ClassifierState::Accumulating { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    fn set_phase(&mut self, next: Phase) {
        if let ClassifierState::Accumulating { phase, .. } = &mut self.state {
            *phase = next;
        }
    }

    fn take_codes(&mut self, scan: CodeScan) {
        if let ClassifierState::Accumulating { draft, .. } = &mut self.state {
            draft.codes.extend(scan.codes);
        }
        self.out.malformed_tokens.extend(scan.rejected);
    }

    fn append(&mut self, text: &str, role: LineRole) -> LineRole {
        let g = self.grammar;
        let ClassifierState::Accumulating {
            draft,
            phase: Phase::Body,
        } = &mut self.state
        else {
            return LineRole::Discarded;
        };

        let (text, scan) = match g.inline_codes {
            Some(split) => split(text),
            None => (text.to_string(), CodeScan::default()),
        };
        draft.codes.extend(scan.codes);
        self.out.malformed_tokens.extend(scan.rejected);

        if text.is_empty() || char_len(&text) < g.min_fragment_chars {
            return LineRole::Discarded;
        }
        draft.lines.push(text);
        role
    }

    fn flush(&mut self) {
        if let ClassifierState::Accumulating { draft, .. } =
            std::mem::replace(&mut self.state, ClassifierState::Idle)
        {
            if self.grammar.flush == FlushRule::Always || draft.has_content() {
                self.out.drafts.push(draft);
            }
        }
    }

    fn emit_active(&mut self) {
        if let ClassifierState::Accumulating { draft, .. } =
            std::mem::replace(&mut self.state, ClassifierState::Idle)
        {
            self.out.drafts.push(draft);
        }
    }
}

/// Run `grammar` over every line of `text`.
pub fn classify_section(text: &str, grammar: &Grammar, bounds: TitleBounds) -> ClassifierOutput {
    let mut classifier = LineClassifier::new(grammar, bounds);
    for line in text.lines() {
        let role = classifier.feed(line);
        trace!(?role, line, "classified");
    }
    classifier.finish()
}

// ── Tests ──
