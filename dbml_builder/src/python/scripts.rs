//! Inline scripts passed to `python -c`

/// Parses the DBML file named by `argv[1]` and prints
/// `{"note": <project note or null>, "sql": <DDL>}`.
pub const PARSE_DBML: &str = r#"
import json
import sys
from pathlib import Path

from pydbml import PyDBML

dbml = PyDBML(Path(sys.argv[1]))
project = dbml.project
note = None
if project is not None and project.note is not None:
    note = project.note.text
json.dump({"note": note, "sql": dbml.sql}, sys.stdout)
"#;

/// Reads DDL from stdin, renders it with omymodels using the models type in
/// `argv[1]` and prints `{"code": <source>}`. Everything omymodels prints,
/// including at import time, is sent to stderr so stdout stays valid JSON.
pub const CREATE_MODELS: &str = r#"
import json
import sys

result_stream = sys.stdout
sys.stdout = sys.stderr
try:
    from omymodels import create_models

    ddl = sys.stdin.read()
    result = create_models(ddl, models_type=sys.argv[1], dump=False, exit_silent=True)
finally:
    sys.stdout = result_stream
json.dump({"code": result["code"]}, result_stream)
"#;
