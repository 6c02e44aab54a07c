use pw_app::{AppError, PlotCatalog};
use pw_core::OutputLayout;
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(root.join("models")).unwrap();
    fs::create_dir_all(root.join("protocols")).unwrap();
    root
}

fn catalog_for(root: &Path) -> PlotCatalog {
    PlotCatalog::new(OutputLayout::new(
        root.join("models"),
        root.join("protocols"),
    ))
}

fn write_output(root: &Path, model: &str, protocol: &str, files: &[(&str, &str)]) {
    let dir = root.join("models").join(model).join(protocol);
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

const CONTENTS_1D: &str = "Variable,Units,Dimensions,File,Type\n\
X,unitX,1,xfile.csv,real\n\
Y,unitY,1,yfile.csv,real\n";

const XFILE_1D: &str = "X\nunitX\n1.0\n2.0\n3.0\n";
const YFILE_1D: &str = "Y\nunitY\n10\n20\n30\n";

#[test]
fn end_to_end_three_point_plot() {
    let root = fixture_root("pw_catalog_end_to_end");
    write_output(
        &root,
        "M",
        "P",
        &[
            ("default-plots.csv", "Plot Name,X Variable,Y Variable\nplot1,X,Y\n"),
            ("contents.csv", CONTENTS_1D),
            ("xfile.csv", XFILE_1D),
            ("yfile.csv", YFILE_1D),
        ],
    );

    let catalog = catalog_for(&root);
    let results = catalog.load_plots(&["M".to_string()], "P").unwrap();

    assert_eq!(results.len(), 1);
    let plot = &results.plots[0];
    assert_eq!(plot.model, "M");
    assert_eq!(plot.protocol, "P");
    assert_eq!(plot.name, "plot1");
    assert_eq!(plot.x_axis_label, "X (unitX)");
    assert_eq!(plot.y_axis_label, "Y (unitY)");
    assert_eq!(plot.series.len(), 1);
    assert_eq!(plot.series[0].points.len(), 3);
}

#[test]
fn missing_manifest_fails_whole_request() {
    let root = fixture_root("pw_catalog_missing_manifest");
    write_output(
        &root,
        "M1",
        "P",
        &[
            ("default-plots.csv", "Plot Name,X Variable,Y Variable\nplot1,X,Y\n"),
            ("contents.csv", CONTENTS_1D),
            ("xfile.csv", XFILE_1D),
            ("yfile.csv", YFILE_1D),
        ],
    );
    // M2 has no output directory at all.

    let catalog = catalog_for(&root);
    let err = catalog
        .load_plots(&["M1".to_string(), "M2".to_string()], "P")
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidRequest(_)));
}

#[test]
fn dimension_mismatch_contributes_empty_result() {
    let root = fixture_root("pw_catalog_mismatch");
    write_output(
        &root,
        "M",
        "P",
        &[
            (
                "default-plots.csv",
                "Plot Name,X Variable,Y Variable\nplot1,X,Y\nbad,X,W\n",
            ),
            (
                "contents.csv",
                "Variable,Units,Dimensions,File,Type\n\
X,unitX,1,xfile.csv,real\n\
Y,unitY,1,yfile.csv,real\n\
W,unitW,2,wfile.csv,real\n",
            ),
            ("xfile.csv", XFILE_1D),
            ("yfile.csv", YFILE_1D),
        ],
    );

    let catalog = catalog_for(&root);
    let results = catalog.load_plots(&["M".to_string()], "P").unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results.plots[0].series.len(), 1);
    assert_eq!(results.plots[1].name, "bad");
    assert!(results.plots[1].series.is_empty());
}

#[test]
fn repeated_loads_are_identical() {
    let root = fixture_root("pw_catalog_idempotent");
    write_output(
        &root,
        "M",
        "P",
        &[
            ("default-plots.csv", "Plot Name,X Variable,Y Variable\nplot1,X,Y\n"),
            ("contents.csv", CONTENTS_1D),
            ("xfile.csv", XFILE_1D),
            ("yfile.csv", YFILE_1D),
        ],
    );

    let catalog = catalog_for(&root);
    let models = vec!["M".to_string()];
    let first = catalog.load_plots(&models, "P").unwrap();
    let second = catalog.load_plots(&models, "P").unwrap();
    assert_eq!(first, second);
}

#[test]
fn duplicate_models_produce_duplicate_results() {
    let root = fixture_root("pw_catalog_duplicates");
    write_output(
        &root,
        "M",
        "P",
        &[
            ("default-plots.csv", "Plot Name,X Variable,Y Variable\nplot1,X,Y\n"),
            ("contents.csv", CONTENTS_1D),
            ("xfile.csv", XFILE_1D),
            ("yfile.csv", YFILE_1D),
        ],
    );

    let catalog = catalog_for(&root);
    let results = catalog
        .load_plots(&["M".to_string(), "M".to_string()], "P")
        .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results.plots[0], results.plots[1]);
}

#[test]
fn omitted_y_uses_implicit_time_axis() {
    let root = fixture_root("pw_catalog_implicit_time");
    write_output(
        &root,
        "M",
        "P",
        &[
            ("default-plots.csv", "Plot Name,X Variable\nplotV,V\n"),
            (
                "contents.csv",
                "Variable,Units,Dimensions,File,Type\nV,mV,2,vfile.csv,real\n",
            ),
            ("steppers.csv", "time\tms\t0\t0.5\t1.0\n"),
            ("vfile.csv", "V\n0.0\t100.0\n0.1\t101.0\n0.2\t102.0\n"),
        ],
    );

    let catalog = catalog_for(&root);
    let results = catalog.load_plots(&["M".to_string()], "P").unwrap();

    assert_eq!(results.len(), 1);
    let plot = &results.plots[0];
    assert_eq!(plot.y_axis_label, "Time (ms)");
    assert_eq!(plot.series.len(), 2);
    assert_eq!(plot.series[0].label, "Trace: 0");
    assert_eq!(plot.series[0].points.len(), 3);
}

#[test]
fn traces_hint_is_carried_through() {
    let root = fixture_root("pw_catalog_traces_hint");
    write_output(
        &root,
        "M",
        "P",
        &[
            (
                "default-plots.csv",
                "Plot Name,X Variable,Y Variable,Traces\nplot1,X,Y,per-run\n",
            ),
            ("contents.csv", CONTENTS_1D),
            ("xfile.csv", XFILE_1D),
            ("yfile.csv", YFILE_1D),
        ],
    );

    let catalog = catalog_for(&root);
    let results = catalog.load_plots(&["M".to_string()], "P").unwrap();
    assert_eq!(results.plots[0].traces_hint.as_deref(), Some("per-run"));
}
