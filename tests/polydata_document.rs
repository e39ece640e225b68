mod util;

use mesh_vtkjs::data::array::{StringArray, TypedArray};
use mesh_vtkjs::data::attributes::AttributeRole;
use mesh_vtkjs::io::{DocumentWriter, JsonWriter, Metadata};
use mesh_vtkjs::mesh::{Mesh, Points};
use mesh_vtkjs::serialize::{
    ArrayValues, DocumentAssembler, SerializeOptions, TypeName, VtkClass, serialize,
};
use serde_json::json;
use util::unit_quad;

#[test]
fn unit_quad_scenario() {
    let doc = serialize(&unit_quad()).unwrap();

    assert_eq!(
        doc.points.array.values,
        ArrayValues::Float32(vec![0., 0., 0., 1., 0., 0., 1., 1., 0., 0., 1., 0.])
    );
    let v = doc.to_value().unwrap();
    assert_eq!(
        v["points"]["ranges"],
        json!([
            {"min": 0.0, "max": 1.0, "component": 0, "name": "X"},
            {"min": 0.0, "max": 1.0, "component": 1, "name": "Y"},
            {"min": 0.0, "max": 0.0, "component": 2, "name": "Z"}
        ])
    );
    assert_eq!(doc.polys.values(), &ArrayValues::Int32(vec![4, 0, 1, 2, 3]));
    assert_eq!(doc.polys.size(), 5);
    assert_eq!(doc.verts.size(), 0);
    assert_eq!(doc.lines.size(), 0);
    assert_eq!(doc.strips.size(), 0);
}

#[test]
fn points_fragment_size_is_three_per_point() {
    let doc = serialize(&unit_quad()).unwrap();
    assert_eq!(doc.points.array.size, 12);
    assert_eq!(doc.points.array.values.len(), 12);
    assert_eq!(doc.points.array.number_of_components, 3);
    assert_eq!(doc.points.array.vtk_class, VtkClass::Points);
}

#[test]
fn top_level_key_order() {
    let mut mesh = unit_quad();
    mesh.field_data
        .add_array(TypedArray::interleaved(Some("time"), 1, vec![0.5f64]).unwrap());
    let doc = serialize(&mesh)
        .unwrap()
        .with_metadata(Metadata::new("quad.vtp", 128).entries());
    let v = doc.to_value().unwrap();
    let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "vtkClass", "points", "verts", "lines", "polys", "strips", "pointData", "cellData",
            "fieldData", "metadata"
        ]
    );
    assert_eq!(v["metadata"], json!({"name": "quad.vtp", "size": 128}));
    assert_eq!(v["fieldData"]["vtkClass"], "vtkDataSetAttributes");
    assert_eq!(v["fieldData"]["arrays"][0]["name"], "time");
    assert_eq!(v["fieldData"]["arrays"][0]["vtkClass"], "vtkDataArray");
    let field_keys: Vec<&str> = v["fieldData"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(field_keys, ["vtkClass", "arrays"]);
}

#[test]
fn empty_cell_groups_are_present_on_the_wire() {
    let doc = serialize(&Mesh::new(Points::from_f64(&[[1.0, 2.0, 3.0]]))).unwrap();
    let v = doc.to_value().unwrap();
    for group in ["verts", "lines", "polys", "strips"] {
        let frag = &v[group];
        assert_eq!(frag["vtkClass"], "vtkCellsArray", "{group}");
        assert_eq!(frag["name"], format!("_{group}"));
        assert_eq!(frag["size"], 0);
        assert_eq!(frag["values"], json!([]));
        assert_eq!(frag["numberOfComponents"], 1);
        assert!(frag.as_object().unwrap().contains_key("buffer"));
        assert!(frag["buffer"].is_null());
    }
}

#[test]
fn serialization_is_idempotent() {
    let mut mesh = unit_quad();
    mesh.point_data.add_active_array(
        AttributeRole::Scalars,
        TypedArray::interleaved(Some("height"), 1, vec![0i64, 1, 2, 3]).unwrap(),
    );
    let assembler = DocumentAssembler::new(SerializeOptions::full());
    let first = assembler.assemble(&mesh).unwrap();
    let second = assembler.assemble(&mesh).unwrap();
    assert_eq!(first, second);
    let w = JsonWriter::default();
    let (mut a, mut b) = (Vec::new(), Vec::new());
    w.write(&mut a, &first).unwrap();
    w.write(&mut b, &second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn attribute_data_on_the_wire() {
    let mut mesh = unit_quad();
    mesh.point_data.add_active_array(
        AttributeRole::Normals,
        TypedArray::interleaved(Some("Normals"), 3, vec![0.0f32, 0.0, 1.0].repeat(4)).unwrap(),
    );
    mesh.cell_data.add_array(StringArray {
        name: Some("material".into()),
        values: vec!["steel".into()],
    });
    mesh.cell_data.add_active_array(
        AttributeRole::GlobalIds,
        TypedArray::interleaved(Some("ids"), 1, vec![9u64]).unwrap(),
    );

    let doc = serialize(&mesh).unwrap();
    let point_data = doc.point_data.as_ref().unwrap();
    assert_eq!(point_data.active_normals, 0);
    assert_eq!(point_data.active_scalars, -1);

    let cell_data = doc.cell_data.as_ref().unwrap();
    assert_eq!(cell_data.arrays.len(), 1);
    assert_eq!(cell_data.arrays[0].data_type, TypeName::UInt32);
    assert_eq!(cell_data.active_global_ids, 0);

    let v = doc.to_value().unwrap();
    assert_eq!(v["pointData"]["vtkClass"], "vtkDataSetAttributes");
    assert_eq!(v["pointData"]["activeNormals"], 0);
    assert_eq!(v["pointData"]["activeTCoords"], -1);
    assert_eq!(v["pointData"]["doAllCopyOn"], true);
    assert_eq!(v["pointData"]["doAllCopyOff"], false);
    assert_eq!(v["pointData"]["copyFieldFlags"], json!([]));
    assert_eq!(v["pointData"]["arrays"][0]["dataType"], "Float32Array");
    assert_eq!(v["cellData"]["arrays"][0]["values"], json!([9]));
}

#[test]
fn geometry_profile_is_points_and_cells_only() {
    let doc = DocumentAssembler::new(SerializeOptions::geometry_only())
        .assemble(&unit_quad())
        .unwrap();
    let v = doc.to_value().unwrap();
    let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["vtkClass", "points", "verts", "lines", "polys", "strips"]);
}
