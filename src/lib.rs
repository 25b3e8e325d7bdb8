/*!
# Gundagardi Study Service

Backend core for the Gundagardi Hindi-literature study application, built in Rust.

## Overview

This crate reimplements the data core of a study app that presents curated
Hindi stories and poems, an English-Hindi dictionary helper, and a feedback
form backed by a spreadsheet HTTP API. The presentation layer (routing,
theming, animation) is an external consumer; everything here is the logic
underneath it.

## Architecture

### Core Layer
- **List Query Engine** - One shared filter/sort/search operation serving the
  story list, the poem list, the recent dictionary searches and the admin
  feedback log
- **Content Catalog** - The fixed story and poem collections with their
  category enumerations
- **CSV Export Adapter** - Serializes a filtered feedback view to a
  downloadable CSV file

### Client Layer
- **Feedback Store Client** - SheetDB-style spreadsheet API (fetch, append,
  delete-by-timestamp), with a mock development mode while unconfigured
- **Dictionary Client** - Definition lookups against the public dictionary
  API, with a bounded, deduplicated recent-search history

### Persistence Layer
- **Preference Store** - Typed key/value port with file-backed and in-memory
  implementations (version-notice flag, recent searches)
- **Credentials** - Argon2-hashed account file and uuid session tokens

### Web Layer (feature `web`)
- axum router exposing the listings, feedback log, CSV export, dictionary
  and login endpoints; admin-gated where the feedback data is involved

## Modules

- **query**: the list query engine (Query, Record, apply)
- **catalog**: static story and poem content
- **downloader**: CSV export and re-parse helpers
- **feedback**: feedback rows, validation, remote store client
- **dictionary**: lookup client and recent searches
- **prefs**: preference persistence port
- **login**: authenticator capability and sessions
- **config**: environment-driven configuration
- **app**: routing and handlers (requires the `web` feature)

## REST API Endpoints

- `/api/stories`, `/api/poems` - filtered/sorted listings
- `/api/feedback` - list (admin), submit
- `/api/feedback/export` - CSV download (admin)
- `/api/feedback/{timestamp}` - delete one row (admin)
- `/api/dictionary/{word}`, `/api/dictionary/recent` - lookups and history
- `/api/login`, `/api/logout` - session handling
- `/api/version-notice` - notice preference
*/

// Re-export all modules so they appear in the documentation
pub mod catalog;
pub mod config;
pub mod dictionary;
pub mod downloader;
pub mod feedback;
pub mod login;
pub mod prefs;
pub mod query;

#[cfg(feature = "web")]
pub mod app;

/// Re-export the core types to make them easier to use
pub use query::{apply, Query, Record, SortDirection, ALL_CATEGORIES};
