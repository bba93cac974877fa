//! Style deduplication and hoisting.
//!
//! The collector is the one stage that materializes the stream: it reads the
//! whole artifact sequence once, drops every `StyledClass` whose class was
//! already seen and moves the survivors to where the [`HoistPolicy`] says
//! they belong. Everything else passes through in original order.
//!
//! Dropping a duplicate is invisible to structure: the owning `TagOpen` still
//! names the shared class.

use std::collections::HashSet;

use crate::artifact::Artifact;
use crate::error::ForgeError;
use crate::style::ClassName;

/// Tag wrapped around inline style blocks and searched for when hoisting.
pub const STYLE_TAG: &str = "style";

/// Where unique style blocks end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoistPolicy {
    /// Each unique block stays where it was produced, wrapped in its own
    /// `<style>` element right before the element that owns it.
    Inline,
    /// All unique blocks are spliced, in first-seen order, directly after the
    /// first `TagOpen` whose tag name is `marker`. Unless the marker is itself
    /// a `<style>` element the spliced run gets its own `<style>` wrapper.
    /// Matching is case-insensitive.
    SinglePoint { marker: String },
}

impl HoistPolicy {
    pub fn single_point() -> Self {
        HoistPolicy::SinglePoint {
            marker: STYLE_TAG.to_string(),
        }
    }
}

impl Default for HoistPolicy {
    fn default() -> Self {
        Self::single_point()
    }
}

/// Counters gathered while collecting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectStats {
    /// `StyledClass` artifacts read.
    pub styled: usize,
    /// Distinct classes kept.
    pub unique: usize,
    /// Artifacts dropped because their class was already kept.
    pub duplicates: usize,
}

/// The reordered stream, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected<'a> {
    pub artifacts: Vec<Artifact<'a>>,
    pub stats: CollectStats,
}

#[derive(Debug)]
pub struct Collector {
    policy: HoistPolicy,
    seen: HashSet<ClassName>,
    stats: CollectStats,
}

impl Collector {
    pub fn new(policy: HoistPolicy) -> Self {
        // Elements lower-case their tag names, so the marker must be too.
        let policy = match policy {
            HoistPolicy::SinglePoint { marker } => HoistPolicy::SinglePoint {
                marker: marker.to_ascii_lowercase(),
            },
            inline => inline,
        };
        Self {
            policy,
            seen: HashSet::new(),
            stats: CollectStats::default(),
        }
    }

    /// Consume a full artifact stream.
    ///
    /// Fails with [`ForgeError::MissingHoistPoint`] when single-point hoisting
    /// has style blocks to place but the stream never opens the marker tag.
    pub fn collect<'a, I>(mut self, artifacts: I) -> Result<Collected<'a>, ForgeError>
    where
        I: IntoIterator<Item = Artifact<'a>>,
    {
        let collected = match self.policy.clone() {
            HoistPolicy::Inline => self.collect_inline(artifacts),
            HoistPolicy::SinglePoint { marker } => self.collect_single_point(artifacts, &marker)?,
        };

        tracing::debug!(
            artifacts = collected.len(),
            styled = self.stats.styled,
            unique = self.stats.unique,
            duplicates = self.stats.duplicates,
            "collected artifact stream"
        );

        Ok(Collected {
            artifacts: collected,
            stats: self.stats,
        })
    }

    fn collect_inline<'a, I>(&mut self, artifacts: I) -> Vec<Artifact<'a>>
    where
        I: IntoIterator<Item = Artifact<'a>>,
    {
        let mut out = Vec::new();
        for artifact in artifacts {
            if let Artifact::StyledClass { class_name, .. } = &artifact {
                if !self.admit(class_name) {
                    continue;
                }
                out.push(Artifact::open(STYLE_TAG));
                out.push(artifact);
                out.push(Artifact::close(STYLE_TAG));
            } else {
                out.push(artifact);
            }
        }
        out
    }

    fn collect_single_point<'a, I>(
        &mut self,
        artifacts: I,
        marker: &str,
    ) -> Result<Vec<Artifact<'a>>, ForgeError>
    where
        I: IntoIterator<Item = Artifact<'a>>,
    {
        let mut structure = Vec::new();
        let mut hoisted = Vec::new();
        let mut splice_at: Option<usize> = None;

        for artifact in artifacts {
            if let Artifact::StyledClass { class_name, .. } = &artifact {
                if self.admit(class_name) {
                    hoisted.push(artifact);
                }
                continue;
            }

            let is_marker = splice_at.is_none() && artifact.opens(marker);
            structure.push(artifact);
            if is_marker {
                splice_at = Some(structure.len());
            }
        }

        if hoisted.is_empty() {
            return Ok(structure);
        }

        let at = splice_at.ok_or_else(|| ForgeError::MissingHoistPoint {
            marker: marker.to_string(),
            pending: hoisted.len(),
        })?;
        tracing::debug!(at, blocks = hoisted.len(), marker, "hoisting style blocks");
        if marker == STYLE_TAG {
            structure.splice(at..at, hoisted);
        } else {
            let wrapped = std::iter::once(Artifact::open(STYLE_TAG))
                .chain(hoisted)
                .chain(std::iter::once(Artifact::close(STYLE_TAG)));
            structure.splice(at..at, wrapped);
        }

        Ok(structure)
    }

    /// Record a class; true the first time it is seen.
    fn admit(&mut self, class_name: &ClassName) -> bool {
        self.stats.styled += 1;
        if self.seen.contains(class_name) {
            self.stats.duplicates += 1;
            tracing::trace!(class = %class_name, "dropping duplicate style block");
            false
        } else {
            self.seen.insert(class_name.clone());
            self.stats.unique += 1;
            true
        }
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(HoistPolicy::default())
    }
}
