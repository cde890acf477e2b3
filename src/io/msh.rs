//! MSH v2.2 reader and writer, text and binary encodings.
//!
//! # Supported format
//! - `.msh` version 2.x, float width 8 (double precision) only.
//! - Sections: `$MeshFormat`, `$Nodes`, `$Elements`, then any number of
//!   `$NodeData`/`$ElementData` blocks until end of file.
//! - Element sections may only carry triangles and tetrahedra.
//!
//! # Binary layout
//! All integers are native-endian `i32`, all reals native-endian `f64`.
//! Section tags, counts and data-block tag lines stay textual in binary
//! files; only node records, element records and value rows are raw bytes.
//! Element records are self-describing: every record group starts with a
//! `(type, elements_following, tag_count)` header. Some encoders write one
//! header per element (`elements_following = 1`) even for long runs of the
//! same type, so the reader never assumes block homogeneity; the writer
//! emits the one-header-per-element convention.
//!
//! Legacy producers disagree on whether a line feed follows a binary block,
//! so a single trailing newline byte is consumed when present and the cursor
//! is left untouched when it is not.

use std::io::{BufRead, ErrorKind, Write};
use std::str::FromStr;

use itertools::Itertools;

use crate::error::MeshVoxelError;
use crate::io::{Encoding, MeshReader, MeshWriter};
use crate::mesh::{
    ElementTable, ElementType, FieldSeries, FieldTarget, Mesh, NodeTable, Provenance,
};

const NODE_RECORD_BYTES: usize = 4 + 3 * 8;

/// MSH v2.2 reader for both encodings.
#[derive(Debug, Default, Clone)]
pub struct MshReader;

/// MSH v2.2 writer for both encodings.
#[derive(Debug, Default, Clone)]
pub struct MshWriter;

impl MeshReader for MshReader {
    fn read<R: BufRead>(&self, reader: R) -> Result<Mesh, MeshVoxelError> {
        Parser {
            input: reader,
            binary: false,
        }
        .read_mesh()
    }
}

struct Parser<R> {
    input: R,
    binary: bool,
}

impl<R: BufRead> Parser<R> {
    fn read_mesh(mut self) -> Result<Mesh, MeshVoxelError> {
        self.read_format()?;
        let nodes = self.read_nodes()?;
        let elements = self.read_elements()?;

        let mut node_data = Vec::new();
        let mut element_data = Vec::new();
        loop {
            let Some(line) = self.next_line()? else {
                break; // end of file is the normal terminator
            };
            match line.trim() {
                "" => continue,
                "$NodeData" => node_data.push(self.read_data_block(FieldTarget::Node)?),
                "$ElementData" => element_data.push(self.read_data_block(FieldTarget::Element)?),
                other => {
                    return Err(MeshVoxelError::parse(format!(
                        "unrecognized section `{other}`"
                    )));
                }
            }
        }

        let provenance = Provenance {
            binary: self.binary,
            ..Provenance::default()
        };
        Mesh::try_assemble(nodes, elements, node_data, element_data, provenance)
    }

    fn read_format(&mut self) -> Result<(), MeshVoxelError> {
        self.expect_tag("$MeshFormat")?;
        let header = self.require_line("mesh format header")?;
        let mut parts = header.split_whitespace();
        let version = parts
            .next()
            .ok_or_else(|| MeshVoxelError::parse("missing mesh format version"))?;
        let file_type = parts
            .next()
            .ok_or_else(|| MeshVoxelError::parse("missing mesh format file type"))?;
        let data_size = parts
            .next()
            .ok_or_else(|| MeshVoxelError::parse("missing mesh format data size"))?;

        let major = version.split('.').next().unwrap_or(version);
        if major != "2" {
            return Err(MeshVoxelError::parse(format!(
                "unsupported mesh format version {version}, only 2.x is handled"
            )));
        }
        self.binary = match file_type {
            "0" => false,
            "1" => true,
            other => {
                return Err(MeshVoxelError::parse(format!(
                    "unrecognized file type `{other}` in mesh format header"
                )));
            }
        };
        if data_size != "8" {
            return Err(MeshVoxelError::parse(format!(
                "data size must be 8 (double precision), found {data_size}"
            )));
        }

        if self.binary {
            let mut marker = [0u8; 4];
            self.read_exact_or_parse(&mut marker, "endianness marker")?;
            if i32::from_ne_bytes(marker) != 1 {
                return Err(MeshVoxelError::parse(
                    "endianness marker is not 1; byte order mismatch",
                ));
            }
            self.consume_optional_newline()?;
        }
        self.expect_tag("$EndMeshFormat")
    }

    fn read_nodes(&mut self) -> Result<NodeTable, MeshVoxelError> {
        self.expect_tag("$Nodes")?;
        let count: usize = self.parse_count_line("node count")?;
        log::debug!("reading {count} nodes");

        let mut ids = Vec::with_capacity(count);
        let mut coords = Vec::with_capacity(count);
        if self.binary {
            let mut raw = vec![0u8; count * NODE_RECORD_BYTES];
            self.read_exact_or_parse(&mut raw, "node records")?;
            for record in raw.chunks_exact(NODE_RECORD_BYTES) {
                let mut cursor = record;
                ids.push(take_i32(&mut cursor));
                coords.push([
                    take_f64(&mut cursor),
                    take_f64(&mut cursor),
                    take_f64(&mut cursor),
                ]);
            }
            self.consume_optional_newline()?;
        } else {
            for _ in 0..count {
                let line = self.require_record_line("node record")?;
                let mut parts = line.split_whitespace();
                let id = parse_token::<i32>(parts.next(), "node id")?;
                let x = parse_token::<f64>(parts.next(), "node x coordinate")?;
                let y = parse_token::<f64>(parts.next(), "node y coordinate")?;
                let z = parse_token::<f64>(parts.next(), "node z coordinate")?;
                ids.push(id);
                coords.push([x, y, z]);
            }
        }

        self.expect_tag("$EndNodes")?;
        let nodes = NodeTable::try_new(ids, coords)?;
        if !self.binary {
            nodes.require_compact()?;
        }
        Ok(nodes)
    }

    fn read_elements(&mut self) -> Result<ElementTable, MeshVoxelError> {
        self.expect_tag("$Elements")?;
        let count: usize = self.parse_count_line("element count")?;
        log::debug!("reading {count} elements");

        let mut ids = Vec::with_capacity(count);
        let mut types = Vec::with_capacity(count);
        let mut region_tags = Vec::with_capacity(count);
        let mut entity_tags = Vec::with_capacity(count);
        let mut nodes = Vec::with_capacity(count);

        if self.binary {
            while ids.len() < count {
                let mut header = [0u8; 12];
                self.read_exact_or_parse(&mut header, "element group header")?;
                let mut cursor = &header[..];
                let type_code = take_i32(&mut cursor);
                let following = take_i32(&mut cursor);
                let tag_count = take_i32(&mut cursor);

                let ty = volumetric_type(type_code)?;
                if following < 1 {
                    return Err(MeshVoxelError::parse(format!(
                        "element group declares {following} elements following"
                    )));
                }
                let tag_count = usize::try_from(tag_count).map_err(|_| {
                    MeshVoxelError::parse(format!("negative element tag count {tag_count}"))
                })?;
                if tag_count < 2 {
                    return Err(MeshVoxelError::parse(format!(
                        "element records need at least 2 tags, found {tag_count}"
                    )));
                }
                if ids.len() + following as usize > count {
                    return Err(MeshVoxelError::parse(format!(
                        "element group overruns declared count {count}"
                    )));
                }

                let record_words = 1 + tag_count + ty.node_count();
                let mut raw = vec![0u8; following as usize * record_words * 4];
                self.read_exact_or_parse(&mut raw, "element records")?;
                let mut cursor = &raw[..];
                for _ in 0..following {
                    ids.push(take_i32(&mut cursor));
                    let mut tags = [0i32; 2];
                    for slot in 0..tag_count {
                        let tag = take_i32(&mut cursor);
                        if slot < 2 {
                            tags[slot] = tag;
                        }
                    }
                    let mut conn = [0i32; 4];
                    for slot in conn.iter_mut().take(ty.node_count()) {
                        *slot = take_i32(&mut cursor);
                    }
                    types.push(ty);
                    region_tags.push(tags[0]);
                    entity_tags.push(tags[1]);
                    nodes.push(conn);
                }
            }
            self.consume_optional_newline()?;
        } else {
            for _ in 0..count {
                let line = self.require_record_line("element record")?;
                let mut parts = line.split_whitespace();
                let id = parse_token::<i32>(parts.next(), "element id")?;
                let type_code = parse_token::<i32>(parts.next(), "element type")?;
                let ty = volumetric_type(type_code)?;
                let tag_count = parse_token::<usize>(parts.next(), "element tag count")?;
                if tag_count < 2 {
                    return Err(MeshVoxelError::parse(format!(
                        "element {id} has {tag_count} tags, need at least 2"
                    )));
                }
                let mut tags = [0i32; 2];
                for slot in 0..tag_count {
                    let tag = parse_token::<i32>(parts.next(), "element tag")?;
                    if slot < 2 {
                        tags[slot] = tag;
                    }
                }
                let mut conn = [0i32; 4];
                for slot in conn.iter_mut().take(ty.node_count()) {
                    *slot = parse_token::<i32>(parts.next(), "element node id")?;
                }
                ids.push(id);
                types.push(ty);
                region_tags.push(tags[0]);
                entity_tags.push(tags[1]);
                nodes.push(conn);
            }
        }

        self.expect_tag("$EndElements")?;
        let elements = ElementTable::try_new(ids, types, region_tags, entity_tags, nodes)?;
        elements.require_compact()?;
        Ok(elements)
    }

    fn read_data_block(&mut self, target: FieldTarget) -> Result<FieldSeries, MeshVoxelError> {
        let (open_tag, end_tag) = match target {
            FieldTarget::Node => ("$NodeData", "$EndNodeData"),
            FieldTarget::Element => ("$ElementData", "$EndElementData"),
        };

        let string_count: usize = self.parse_count_line("string tag count")?;
        if string_count != 1 && string_count != 2 {
            return Err(MeshVoxelError::parse(format!(
                "{open_tag} declares {string_count} string tags, expected 1 or 2"
            )));
        }
        let mut string_tags = Vec::with_capacity(string_count);
        for _ in 0..string_count {
            let line = self.require_line("string tag")?;
            string_tags.push(line.trim().trim_matches('"').to_string());
        }

        let real_count: usize = self.parse_count_line("real tag count")?;
        if real_count != 1 {
            return Err(MeshVoxelError::parse(format!(
                "{open_tag} declares {real_count} real tags, expected exactly 1"
            )));
        }
        let mut real_tags = Vec::with_capacity(real_count);
        for _ in 0..real_count {
            let line = self.require_line("real tag")?;
            real_tags.push(parse_token::<f64>(Some(line.trim()), "real tag")?);
        }

        let integer_count: usize = self.parse_count_line("integer tag count")?;
        if integer_count < 3 {
            return Err(MeshVoxelError::parse(format!(
                "{open_tag} declares {integer_count} integer tags, need at least 3"
            )));
        }
        let mut integer_tags = Vec::with_capacity(integer_count);
        for _ in 0..integer_count {
            let line = self.require_line("integer tag")?;
            integer_tags.push(parse_token::<i32>(Some(line.trim()), "integer tag")?);
        }
        let components = usize::try_from(integer_tags[1]).map_err(|_| {
            MeshVoxelError::parse(format!("negative component count {}", integer_tags[1]))
        })?;
        let entity_count = usize::try_from(integer_tags[2]).map_err(|_| {
            MeshVoxelError::parse(format!("negative entity count {}", integer_tags[2]))
        })?;
        if components == 0 {
            return Err(MeshVoxelError::parse(format!(
                "{open_tag} declares 0 components"
            )));
        }
        log::debug!("reading {open_tag} block: {entity_count} x {components}");

        let mut entity_ids = Vec::with_capacity(entity_count);
        let mut values = Vec::with_capacity(entity_count * components);
        if self.binary {
            let row_bytes = 4 + components * 8;
            let mut raw = vec![0u8; entity_count * row_bytes];
            self.read_exact_or_parse(&mut raw, "data rows")?;
            for record in raw.chunks_exact(row_bytes) {
                let mut cursor = record;
                entity_ids.push(take_i32(&mut cursor));
                for _ in 0..components {
                    values.push(take_f64(&mut cursor));
                }
            }
            self.consume_optional_newline()?;
        } else {
            for _ in 0..entity_count {
                let line = self.require_record_line("data row")?;
                let mut parts = line.split_whitespace();
                entity_ids.push(parse_token::<i32>(parts.next(), "data row entity id")?);
                for _ in 0..components {
                    values.push(parse_token::<f64>(parts.next(), "data row value")?);
                }
                if parts.next().is_some() {
                    return Err(MeshVoxelError::parse(format!(
                        "data row carries more than {components} components"
                    )));
                }
            }
        }

        self.expect_tag(end_tag)?;
        FieldSeries::try_new(
            target,
            string_tags,
            real_tags,
            integer_tags,
            entity_ids,
            values,
        )
    }

    /// Next line with the trailing newline (and any `\r`) stripped;
    /// `None` at end of file.
    fn next_line(&mut self) -> Result<Option<String>, MeshVoxelError> {
        let mut raw = Vec::new();
        let read = self.input.read_until(b'\n', &mut raw)?;
        if read == 0 {
            return Ok(None);
        }
        let text = std::str::from_utf8(&raw)
            .map_err(|_| MeshVoxelError::parse("non-UTF-8 text in section header"))?;
        Ok(Some(text.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn require_line(&mut self, what: &str) -> Result<String, MeshVoxelError> {
        self.next_line()?
            .ok_or_else(|| MeshVoxelError::parse(format!("unexpected end of file, expected {what}")))
    }

    /// Like [`Self::require_line`], but a section tag in record position means
    /// the declared count overshot the records actually present.
    fn require_record_line(&mut self, what: &str) -> Result<String, MeshVoxelError> {
        let line = self.require_line(what)?;
        if line.starts_with('$') {
            return Err(MeshVoxelError::parse(format!(
                "section ended at `{line}` before its declared record count"
            )));
        }
        Ok(line)
    }

    fn expect_tag(&mut self, tag: &str) -> Result<(), MeshVoxelError> {
        let line = self.require_line(tag)?;
        if line.trim() != tag {
            return Err(MeshVoxelError::parse(format!(
                "expected `{tag}`, found `{line}`"
            )));
        }
        Ok(())
    }

    fn parse_count_line<T: FromStr>(&mut self, what: &str) -> Result<T, MeshVoxelError> {
        let line = self.require_line(what)?;
        parse_token(Some(line.trim()), what)
    }

    /// `read_exact` with end-of-file reported as a structural error: running
    /// out of bytes mid-section is a count mismatch, not an I/O problem.
    fn read_exact_or_parse(&mut self, buf: &mut [u8], what: &str) -> Result<(), MeshVoxelError> {
        self.input.read_exact(buf).map_err(|err| {
            if err.kind() == ErrorKind::UnexpectedEof {
                MeshVoxelError::parse(format!("unexpected end of file while reading {what}"))
            } else {
                MeshVoxelError::Io(err)
            }
        })
    }

    /// Some writers put a line feed after a binary block, some do not.
    /// Consume one if present, otherwise leave the cursor untouched.
    fn consume_optional_newline(&mut self) -> Result<(), MeshVoxelError> {
        let buf = self.input.fill_buf()?;
        if buf.first() == Some(&b'\n') {
            self.input.consume(1);
        }
        Ok(())
    }
}

/// Element type in a file section: only triangles and tetrahedra are valid.
fn volumetric_type(code: i32) -> Result<ElementType, MeshVoxelError> {
    match ElementType::from_code(code) {
        Some(ty @ (ElementType::Triangle | ElementType::Tetrahedron)) => Ok(ty),
        _ => Err(MeshVoxelError::UnsupportedElement(code)),
    }
}

fn parse_token<T: FromStr>(token: Option<&str>, what: &str) -> Result<T, MeshVoxelError> {
    let token = token.ok_or_else(|| MeshVoxelError::parse(format!("missing {what}")))?;
    token
        .parse::<T>()
        .map_err(|_| MeshVoxelError::parse(format!("invalid {what}: `{token}`")))
}

fn take_i32(bytes: &mut &[u8]) -> i32 {
    let value = i32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    *bytes = &bytes[4..];
    value
}

fn take_f64(bytes: &mut &[u8]) -> f64 {
    let value = f64::from_ne_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ]);
    *bytes = &bytes[8..];
    value
}

impl MeshWriter for MshWriter {
    fn write<W: Write>(
        &self,
        mut writer: W,
        mesh: &Mesh,
        encoding: Encoding,
    ) -> Result<(), MeshVoxelError> {
        mesh.validate_for_write()?;
        match encoding {
            Encoding::Ascii => self.write_ascii(&mut writer, mesh),
            Encoding::Binary => self.write_binary(&mut writer, mesh),
        }
    }
}

impl MshWriter {
    fn write_ascii<W: Write>(&self, w: &mut W, mesh: &Mesh) -> Result<(), MeshVoxelError> {
        write!(w, "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n")?;

        writeln!(w, "$Nodes")?;
        writeln!(w, "{}", mesh.nodes().len())?;
        for (id, [x, y, z]) in mesh.nodes().iter() {
            writeln!(w, "{id} {x} {y} {z}")?;
        }
        writeln!(w, "$EndNodes")?;

        writeln!(w, "$Elements")?;
        writeln!(w, "{}", mesh.elements().len())?;
        let elements = mesh.elements();
        for idx in 0..elements.len() {
            writeln!(
                w,
                "{} {} 2 {} {} {}",
                elements.ids()[idx],
                elements.types()[idx].code(),
                elements.region_tags()[idx],
                elements.entity_tags()[idx],
                elements.nodes_of(idx).iter().format(" ")
            )?;
        }
        writeln!(w, "$EndElements")?;

        for series in mesh.node_data() {
            self.write_data_header(w, series)?;
            self.write_ascii_rows(w, series)?;
            writeln!(w, "$EndNodeData")?;
        }
        for series in mesh.element_data() {
            self.write_data_header(w, series)?;
            self.write_ascii_rows(w, series)?;
            writeln!(w, "$EndElementData")?;
        }
        Ok(())
    }

    fn write_ascii_rows<W: Write>(
        &self,
        w: &mut W,
        series: &FieldSeries,
    ) -> Result<(), MeshVoxelError> {
        for (row, &id) in series.entity_ids().iter().enumerate() {
            writeln!(w, "{id} {}", series.row(row).iter().format(" "))?;
        }
        Ok(())
    }

    fn write_binary<W: Write>(&self, w: &mut W, mesh: &Mesh) -> Result<(), MeshVoxelError> {
        write!(w, "$MeshFormat\n2.2 1 8\n")?;
        w.write_all(&1i32.to_ne_bytes())?;
        write!(w, "\n$EndMeshFormat\n")?;

        writeln!(w, "$Nodes")?;
        writeln!(w, "{}", mesh.nodes().len())?;
        for (id, coord) in mesh.nodes().iter() {
            w.write_all(&id.to_ne_bytes())?;
            for axis in coord {
                w.write_all(&axis.to_ne_bytes())?;
            }
        }
        writeln!(w, "$EndNodes")?;

        writeln!(w, "$Elements")?;
        writeln!(w, "{}", mesh.elements().len())?;
        let elements = mesh.elements();
        for idx in 0..elements.len() {
            // self-describing record: one header per element
            w.write_all(&elements.types()[idx].code().to_ne_bytes())?;
            w.write_all(&1i32.to_ne_bytes())?;
            w.write_all(&2i32.to_ne_bytes())?;
            w.write_all(&elements.ids()[idx].to_ne_bytes())?;
            w.write_all(&elements.region_tags()[idx].to_ne_bytes())?;
            w.write_all(&elements.entity_tags()[idx].to_ne_bytes())?;
            for node_id in elements.nodes_of(idx) {
                w.write_all(&node_id.to_ne_bytes())?;
            }
        }
        writeln!(w, "$EndElements")?;

        for series in mesh.node_data() {
            self.write_data_header(w, series)?;
            self.write_binary_rows(w, series)?;
            writeln!(w, "$EndNodeData")?;
        }
        for series in mesh.element_data() {
            self.write_data_header(w, series)?;
            self.write_binary_rows(w, series)?;
            writeln!(w, "$EndElementData")?;
        }
        Ok(())
    }

    /// Tag-line framing of a data block; always text, in both encodings.
    fn write_data_header<W: Write>(
        &self,
        w: &mut W,
        series: &FieldSeries,
    ) -> Result<(), MeshVoxelError> {
        writeln!(
            w,
            "{}",
            match series.target() {
                FieldTarget::Node => "$NodeData",
                FieldTarget::Element => "$ElementData",
            }
        )?;
        writeln!(w, "{}", series.string_tags().len())?;
        for tag in series.string_tags() {
            writeln!(w, "\"{tag}\"")?;
        }
        writeln!(w, "{}", series.real_tags().len())?;
        for tag in series.real_tags() {
            writeln!(w, "{tag}")?;
        }
        writeln!(w, "{}", series.integer_tags().len())?;
        for tag in series.integer_tags() {
            writeln!(w, "{tag}")?;
        }
        Ok(())
    }

    fn write_binary_rows<W: Write>(
        &self,
        w: &mut W,
        series: &FieldSeries,
    ) -> Result<(), MeshVoxelError> {
        for (row, &id) in series.entity_ids().iter().enumerate() {
            w.write_all(&id.to_ne_bytes())?;
            for value in series.row(row) {
                w.write_all(&value.to_ne_bytes())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY_ASCII: &str = "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n\
$Nodes\n4\n1 0 0 0\n2 1 0 0\n3 0 1 0\n4 0 0 1\n$EndNodes\n\
$Elements\n2\n1 2 2 1002 1005 1 2 3\n2 4 2 2 5 1 2 3 4\n$EndElements\n";

    #[test]
    fn ascii_mesh_parses() {
        let mesh = MshReader.read(TINY_ASCII.as_bytes()).unwrap();
        assert_eq!(mesh.nodes().len(), 4);
        assert_eq!(mesh.elements().len(), 2);
        assert_eq!(mesh.elements().types()[1], ElementType::Tetrahedron);
        assert_eq!(mesh.elements().region_tags(), &[1002, 2]);
        assert!(!mesh.provenance().binary);
    }

    #[test]
    fn unsupported_element_code_is_fatal() {
        let text = TINY_ASCII.replace("2 4 2 2 5 1 2 3 4", "2 5 2 2 5 1 2 3 4");
        let err = MshReader.read(text.as_bytes()).unwrap_err();
        assert!(matches!(err, MeshVoxelError::UnsupportedElement(5)));
    }

    #[test]
    fn wrong_data_size_is_fatal() {
        let text = TINY_ASCII.replace("2.2 0 8", "2.2 0 4");
        assert!(matches!(
            MshReader.read(text.as_bytes()),
            Err(MeshVoxelError::StructuralParse(_))
        ));
    }

    #[test]
    fn binary_endianness_marker_is_checked() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"$MeshFormat\n2.2 1 8\n");
        bytes.extend_from_slice(&2i32.to_ne_bytes()); // wrong marker
        bytes.extend_from_slice(b"\n$EndMeshFormat\n");
        assert!(matches!(
            MshReader.read(bytes.as_slice()),
            Err(MeshVoxelError::StructuralParse(_))
        ));
    }

    #[test]
    fn binary_element_runs_may_share_one_header() {
        // two tetrahedra under a single (type, 2, ntags) group header
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"$MeshFormat\n2.2 1 8\n");
        bytes.extend_from_slice(&1i32.to_ne_bytes());
        bytes.extend_from_slice(b"\n$EndMeshFormat\n$Nodes\n5\n");
        for (id, coord) in [
            (1i32, [0.0f64, 0.0, 0.0]),
            (2, [1.0, 0.0, 0.0]),
            (3, [0.0, 1.0, 0.0]),
            (4, [0.0, 0.0, 1.0]),
            (5, [1.0, 1.0, 1.0]),
        ] {
            bytes.extend_from_slice(&id.to_ne_bytes());
            for axis in coord {
                bytes.extend_from_slice(&axis.to_ne_bytes());
            }
        }
        bytes.extend_from_slice(b"$EndNodes\n$Elements\n2\n");
        for v in [4i32, 2, 2] {
            bytes.extend_from_slice(&v.to_ne_bytes());
        }
        for v in [1i32, 2, 5, 1, 2, 3, 4] {
            bytes.extend_from_slice(&v.to_ne_bytes());
        }
        for v in [2i32, 2, 5, 2, 3, 4, 5] {
            bytes.extend_from_slice(&v.to_ne_bytes());
        }
        bytes.extend_from_slice(b"$EndElements\n");

        let mesh = MshReader.read(bytes.as_slice()).unwrap();
        assert_eq!(mesh.elements().len(), 2);
        assert_eq!(mesh.elements().nodes_of(1), &[2, 3, 4, 5]);
        assert!(mesh.provenance().binary);
    }
}
