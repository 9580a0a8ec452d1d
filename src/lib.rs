//! # Folio
//!
//! A static generator for a personal portfolio site: an About page with
//! portrait, bio and social links, a Projects page of client work, and a Uses
//! page listing tools. Content lives in typed tables compiled into the binary;
//! the build renders them to plain HTML with an animated page shell.
//!
//! # Architecture
//!
//! ```text
//! content   (static records)  →  pages      (page content markup)
//! layout    (shell + head)    →  generate   (dist/ on disk)
//! animation (timelines)       →  stylesheet (CSS @keyframes)
//! ```
//!
//! Rendering is a pure function from records to [`maud::Markup`]; only
//! [`generate`] touches the filesystem. The same inputs always produce the
//! same bytes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Record types: projects, tools, social links, page metadata |
//! | [`content`] | The site's content tables and their validation |
//! | [`components`] | Presentational blocks: lists, cards, sections, icons |
//! | [`layout`] | Document head and the animated page shell |
//! | [`pages`] | About, Projects and Uses page content |
//! | [`animation`] | Entrance timelines, sampling, and their CSS |
//! | [`config`] | `config.toml` loading, validation, merging, and color CSS |
//! | [`naming`] | Slugs and stable element ids derived from titles |
//! | [`generate`] | Writes pages, stylesheet, manifest and public assets |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Animations Are CSS, Content Is Always There
//!
//! Entrance animations are compiled to `@keyframes` rules at build time. No
//! script runs on the page. The markup is identical whether animations are on
//! or off, so a visitor without CSS animation support, or one who prefers
//! reduced motion, gets every piece of content at rest.
//!
//! ## Content in Code
//!
//! The site is small and changes rarely. Keeping records as `const` tables
//! means a typo in a field name is a compile error and there is no content
//! directory to parse. Keys are still validated at build time because
//! uniqueness is not something the type system checks.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Interpolation is
//! auto-escaped and malformed markup fails to compile.

pub mod animation;
pub mod components;
pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod naming;
pub mod output;
pub mod pages;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
