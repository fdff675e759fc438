//! # example-inserter
//!
//! Splices example source code into DocBook XML documents.
//!
//! ## Marker lines
//!
//! The manual references each example program with a marker line:
//!
//! ```text
//! <para><link xlink:href="&url_examples_base;helloworld">Source Code</link></para>
//! ```
//!
//! An older tag syntax is also supported (see [`MarkerSyntax`]):
//!
//! ```text
//! <para><ulink url="&url_examples_base;helloworld">Source Code</ulink></para>
//! ```
//!
//! ## Insertion blocks
//!
//! Every input line is copied to the output verbatim. Directly after a
//! marker line, the matching example directory is listed as a
//! sentinel-delimited block, headers before implementation files, both
//! groups sorted by name:
//!
//! ```text
//! <!-- start inserted example code -->
//! <para>File: <filename>helloworld.h</filename></para>
//! <programlisting>
//! <![CDATA[...source from the first non-comment line onward...]]></programlisting>
//! <para>File: <filename>helloworld.cc</filename></para>
//! <programlisting>
//! <![CDATA[...]]></programlisting>
//! <!-- end inserted example code -->
//! ```
//!
//! The leading comment of each source file (copyright and license text) is
//! dropped; everything from the first line starting with `#` or a word
//! character is copied verbatim, including later comments and blank lines.
//!
//! ## Byte preservation
//!
//! With the default [`Codec::Lossless`] mode, documents and sources are
//! handled as raw byte sequences, so invalid UTF-8 survives the round trip
//! bit-for-bit. [`Codec::Strict`] rejects such files with a typed error
//! instead.

pub mod codec;
pub mod inserter;
pub mod marker;

pub use codec::{Codec, InsertError};
pub use inserter::{Inserter, InserterConfig};
pub use marker::{MarkerSyntax, END_SENTINEL, START_SENTINEL};
