use mesh_voxel::io::{Encoding, MeshReader, MeshWriter, MshReader, MshWriter};
use mesh_voxel::mesh::ElementType;

/// A small simulation container in the writer's canonical ASCII layout:
/// four nodes, one surface triangle, one tetrahedron, a vector node series
/// and a scalar element series.
const FIXTURE: &str = "$MeshFormat\n\
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
2\n\
1 2 2 1002 1005 1 2 3\n\
2 4 2 2 5 1 2 3 4\n\
$EndElements\n\
$NodeData\n\
2\n\
\"E\"\n\
\"simulation\"\n\
1\n\
0\n\
3\n\
0\n\
3\n\
4\n\
1 0 0 0.25\n\
2 0.5 0 0\n\
3 0 1.5 0\n\
4 0 0 2.5\n\
$EndNodeData\n\
$ElementData\n\
1\n\
\"normE\"\n\
1\n\
0\n\
3\n\
0\n\
1\n\
2\n\
1 0\n\
2 5.5\n\
$EndElementData\n";

#[test]
fn ascii_round_trip_is_byte_identical() {
    let mesh = MshReader.read(FIXTURE.as_bytes()).expect("read fixture");

    let mut output = Vec::new();
    MshWriter
        .write(&mut output, &mesh, Encoding::Ascii)
        .expect("write ascii");
    assert_eq!(
        std::str::from_utf8(&output).expect("utf8 output"),
        FIXTURE,
        "ascii round-trip must reproduce the container byte for byte"
    );
}

#[test]
fn binary_round_trip_is_byte_identical() {
    let mesh = MshReader.read(FIXTURE.as_bytes()).expect("read fixture");

    let mut binary = Vec::new();
    MshWriter
        .write(&mut binary, &mesh, Encoding::Binary)
        .expect("write binary");

    let reread = MshReader.read(binary.as_slice()).expect("read binary back");
    assert!(reread.provenance().binary);

    let mut binary_again = Vec::new();
    MshWriter
        .write(&mut binary_again, &reread, Encoding::Binary)
        .expect("write binary again");
    assert_eq!(
        binary, binary_again,
        "binary round-trip must reproduce the element run layout exactly"
    );
}

#[test]
fn encodings_agree_on_content() {
    let ascii_mesh = MshReader.read(FIXTURE.as_bytes()).expect("read fixture");

    let mut binary = Vec::new();
    MshWriter
        .write(&mut binary, &ascii_mesh, Encoding::Binary)
        .expect("write binary");
    let binary_mesh = MshReader.read(binary.as_slice()).expect("read binary");

    assert_eq!(binary_mesh.nodes().ids(), ascii_mesh.nodes().ids());
    assert_eq!(binary_mesh.nodes().coords(), ascii_mesh.nodes().coords());
    assert_eq!(binary_mesh.elements().ids(), ascii_mesh.elements().ids());
    assert_eq!(binary_mesh.elements().types(), ascii_mesh.elements().types());
    assert_eq!(
        binary_mesh.elements().region_tags(),
        ascii_mesh.elements().region_tags()
    );
    assert_eq!(
        binary_mesh.elements().node_lists(),
        ascii_mesh.elements().node_lists()
    );

    let ascii_field = ascii_mesh.element_data_by_name("normE").expect("series");
    let binary_field = binary_mesh.element_data_by_name("normE").expect("series");
    assert_eq!(binary_field.values(), ascii_field.values());
    assert_eq!(binary_field.integer_tags(), ascii_field.integer_tags());

    let node_field = binary_mesh.node_data_by_name("E").expect("node series");
    assert_eq!(node_field.components(), 3);
    assert_eq!(node_field.row_of(3), Some(&[0.0, 1.5, 0.0][..]));
}

#[test]
fn fixture_content_reads_as_expected() {
    let mesh = MshReader.read(FIXTURE.as_bytes()).expect("read fixture");
    assert_eq!(mesh.nodes().len(), 4);
    assert!(mesh.nodes().is_compact());
    assert_eq!(mesh.elements().triangle_count(), 1);
    assert_eq!(mesh.elements().tetrahedron_count(), 1);
    assert_eq!(mesh.elements().types()[1], ElementType::Tetrahedron);
    assert_eq!(mesh.node_data().len(), 1);
    assert_eq!(mesh.element_data().len(), 1);
    assert_eq!(
        mesh.element_data_by_name("normE").expect("series").row_of(2),
        Some(&[5.5][..])
    );
}
