use mesh_voxel::MeshVoxelError;
use mesh_voxel::io::{Encoding, MeshReader, MeshWriter, MshReader, MshWriter};
use mesh_voxel::mesh::Mesh;

const VALID: &str = "$MeshFormat\n\
2.2 0 8\n\
$EndMeshFormat\n\
$Nodes\n\
4\n\
1 0 0 0\n\
2 1 0 0\n\
3 0 1 0\n\
4 0 0 1\n\
$EndNodes\n\
$Elements\n\
1\n\
1 4 2 2 5 1 2 3 4\n\
$EndElements\n";

fn read(text: &str) -> Result<Mesh, MeshVoxelError> {
    MshReader.read(text.as_bytes())
}

#[test]
fn valid_fixture_parses() {
    assert!(read(VALID).is_ok());
}

#[test]
fn element_count_larger_than_records_is_structural() {
    // declares 2 elements, carries 1
    let text = VALID.replace("$Elements\n1\n", "$Elements\n2\n");
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn element_count_smaller_than_records_is_structural() {
    let text = VALID.replace(
        "1 4 2 2 5 1 2 3 4\n",
        "1 4 2 2 5 1 2 3 4\n2 4 2 2 5 1 2 3 4\n",
    );
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn missing_end_tag_is_structural() {
    let text = VALID.replace("$EndNodes\n", "");
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn missing_leading_format_tag_is_structural() {
    let text = VALID.replacen("$MeshFormat\n", "", 1);
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn version_3_is_rejected() {
    let text = VALID.replace("2.2 0 8", "3.0 0 8");
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn float_width_4_is_rejected() {
    let text = VALID.replace("2.2 0 8", "2.2 0 4");
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn hexahedron_is_unsupported() {
    let text = VALID.replace("1 4 2 2 5 1 2 3 4", "1 5 2 2 5 1 2 3 4");
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::UnsupportedElement(5))
    ));
}

#[test]
fn non_contiguous_node_ids_are_rejected() {
    let text = VALID.replace("2 1 0 0\n", "7 1 0 0\n");
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::NonContiguousId { table: "node" })
    ));
}

#[test]
fn non_contiguous_element_ids_are_rejected() {
    let text = VALID.replace("1 4 2 2 5 1 2 3 4", "3 4 2 2 5 1 2 3 4");
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::NonContiguousId { table: "element" })
    ));
}

#[test]
fn dangling_node_reference_is_invalid_mesh() {
    let text = VALID.replace("1 4 2 2 5 1 2 3 4", "1 4 2 2 5 1 2 3 9");
    assert!(matches!(read(&text), Err(MeshVoxelError::InvalidMesh(_))));
}

#[test]
fn three_string_tags_are_rejected() {
    let text = format!(
        "{VALID}$ElementData\n3\n\"a\"\n\"b\"\n\"c\"\n1\n0\n3\n0\n1\n1\n1 5\n$EndElementData\n"
    );
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn real_tag_count_must_be_one() {
    let text =
        format!("{VALID}$ElementData\n1\n\"normE\"\n2\n0\n0\n3\n0\n1\n1\n1 5\n$EndElementData\n");
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn short_data_block_is_structural() {
    // declares 3 rows, carries 1
    let text =
        format!("{VALID}$ElementData\n1\n\"normE\"\n1\n0\n3\n0\n1\n3\n1 5\n$EndElementData\n");
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn unknown_section_is_structural() {
    let text = format!("{VALID}$Periodic\n0\n$EndPeriodic\n");
    assert!(matches!(
        read(&text),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn truncated_binary_nodes_are_structural_not_io() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"$MeshFormat\n2.2 1 8\n");
    bytes.extend_from_slice(&1i32.to_ne_bytes());
    bytes.extend_from_slice(b"\n$EndMeshFormat\n$Nodes\n4\n");
    // only one of the four declared records
    bytes.extend_from_slice(&1i32.to_ne_bytes());
    for axis in [0.0f64, 0.0, 0.0] {
        bytes.extend_from_slice(&axis.to_ne_bytes());
    }
    assert!(matches!(
        MshReader.read(bytes.as_slice()),
        Err(MeshVoxelError::StructuralParse(_))
    ));
}

#[test]
fn empty_mesh_fails_write_preconditions() {
    let mesh = Mesh::default();
    let mut sink = Vec::new();
    let err = MshWriter
        .write(&mut sink, &mesh, Encoding::Ascii)
        .unwrap_err();
    assert!(matches!(err, MeshVoxelError::InvalidMesh(_)));
    assert!(sink.is_empty(), "nothing may be emitted on failure");
}
