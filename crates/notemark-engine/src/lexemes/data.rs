//! Static word tables, one block of five categories per language.

pub(super) const CPP_TYPES: &[&str] = &[
    "bool", "char", "class", "double", "enum", "float", "int", "long", "QHash", "QList", "QMap",
    "QString", "QVector", "short", "size_t", "ssize_t", "struct", "union", "uint8_t", "uint16_t",
    "uint32_t", "uint64_t", "void", "wchar_t",
];

pub(super) const CPP_KEYWORDS: &[&str] = &[
    "asm", "auto", "break", "case", "catch", "const", "const_cast", "continue", "default",
    "delete", "do", "dynamic_cast", "else", "explicit", "for", "goto", "if", "mutable",
    "namespace", "new", "operator", "private", "protected", "public", "register",
    "reinterpret_cast", "return", "signal", "signed", "sizeof", "slot", "static", "static_cast",
    "switch", "template", "this", "throw", "try", "typedef", "unsigned", "using", "volatile",
    "while",
];

pub(super) const CPP_LITERALS: &[&str] = &["false", "nullptr", "NULL", "true"];

pub(super) const CPP_BUILTIN: &[&str] = &[
    "std", "string", "wstring", "cin", "cout", "cerr", "clog", "stdin", "stdout", "stderr",
    "stringstream", "istringstream", "ostringstream", "auto_ptr", "deque", "list", "queue",
    "stack", "vector", "map", "set", "bitset", "multiset", "multimap", "unordered_set",
    "unordered_map", "unordered_multiset", "unordered_multimap", "array", "shared_ptr", "abort",
    "terminate", "abs", "acos", "asin", "atan2", "atan", "calloc", "ceil", "cosh", "cos", "exit",
    "exp", "fabs", "floor", "fmod", "fprintf", "fputs", "free", "frexp", "fscanf", "future",
    "isalnum", "isalpha", "iscntrl", "isdigit", "isgraph", "islower", "isprint", "ispunct",
    "isspace", "isupper", "isxdigit", "tolower", "toupper", "labs", "ldexp", "log10", "log",
    "malloc", "realloc", "main", "memchr", "memcmp", "memcpy", "memset", "modf", "pow", "printf",
    "putchar", "puts", "scanf", "sinh", "sin", "snprintf", "sprintf", "sqrt", "sscanf", "strcat",
    "strchr", "strcmp", "strcpy", "strcspn", "strlen", "strncat", "strncmp", "strncpy", "strpbrk",
    "strrchr", "strspn", "strstr", "tanh", "tan", "vfprintf", "vprintf", "vsprintf", "endl",
    "initializer_list", "unique_ptr", "complex", "imaginary",
];

pub(super) const CPP_OTHER: &[&str] = &[
    "define", "else", "elif", "endif", "error", "if", "ifdef", "ifndef", "include", "line",
    "pragma", "_Pragma", "undef", "warning",
];

pub(super) const SHELL_TYPES: &[&str] = &[];

pub(super) const SHELL_KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "for", "while", "in", "do", "done", "case", "esac",
    "function",
];

pub(super) const SHELL_LITERALS: &[&str] = &["false", "true"];

pub(super) const SHELL_BUILTIN: &[&str] = &[
    "break", "cd", "continue", "eval", "exec", "exit", "export", "getopts", "hash", "pwd",
    "readonly", "return", "shift", "test", "timestrap", "umask", "unset", "Bash", "alias", "bind",
    "builtin", "caller", "command", "declare", "echo", "enable", "help", "let", "local", "logout",
    "mapfile", "printfread", "readarray", "source", "type", "typeset", "ulimit", "unalias",
    "modifiers", "set", "shopt", "autoload", "bg", "bindkey", "bye", "cap", "chdir", "clone",
    "comparguments", "compcall", "compctl", "compdescribe", "compfilescompgroups", "compquote",
    "comptags", "comptry", "compvalues", "dirs", "disable", "disown", "echotc", "echoti",
    "emulatefc", "fg", "float", "functions", "getcap", "getln", "history", "integer", "jobs",
    "kill", "limit", "log", "noglob", "popd", "printpushd", "pushln", "rehash", "sched", "setcap",
    "setopt", "stat", "suspend", "ttyctl", "unfunction", "unhash", "unlimitunsetopt", "vared",
    "wait", "whence", "where", "which", "zcompile", "zformat", "zftp", "zle", "zmodload",
    "zparseopts", "zprof", "zpty", "zregexparse", "zsocket", "zstyle", "ztcp",
];

pub(super) const SHELL_OTHER: &[&str] = &[];

pub(super) const JS_TYPES: &[&str] = &[
    "var", "class", "byte", "enum", "float", "short", "long", "int", "void", "boolean", "double",
];

pub(super) const JS_KEYWORDS: &[&str] = &[
    "in", "of", "if", "for", "while", "finally", "new", "function", "do", "return", "void", "else",
    "break", "catch", "instanceof", "with", "throw", "case", "default", "try", "this", "switch",
    "continue", "typeof", "delete", "let", "yield", "const", "export", "super", "debugger", "as",
    "async", "await", "static", "import", "from",
];

pub(super) const JS_LITERALS: &[&str] = &["false", "null", "true", "undefined", "NaN", "Infinity"];

pub(super) const JS_BUILTIN: &[&str] = &[
    "eval", "isFinite", "isNaN", "parseFloat", "parseInt", "decodeURI", "decodeURIComponent",
    "encodeURI", "encodeURIComponent", "escape", "unescape", "Object", "Function", "Boolean",
    "Error", "EvalError", "InternalError", "RangeError", "ReferenceError", "StopIteration",
    "SyntaxError", "TypeError", "URIError", "Number", "Math", "Date", "String", "RegExp", "Array",
    "Float32Array", "Float64Array", "Int16Array", "Int32Array", "Int8Array", "Uint16Array",
    "Uint32Array", "Uint8Array", "Uint8ClampedArray", "ArrayBuffer", "DataView", "JSON", "Intl",
    "arguments", "require", "module", "console", "window", "document", "Symbol", "Set", "Map",
    "WeakSet", "WeakMap", "Proxy", "Reflect", "Promise",
];

pub(super) const JS_OTHER: &[&str] = &[];

pub(super) const PHP_TYPES: &[&str] = &["var", "class", "enum", "array"];

pub(super) const PHP_KEYWORDS: &[&str] = &[
    "and", "list", "abstract", "global", "private", "echo", "interface", "as", "static",
    "endswitch", "if", "endwhile", "or", "const", "for", "endforeach", "self", "while", "isset",
    "public", "protected", "exit", "foreach", "throw", "elseif", "empty", "do", "xor", "return",
    "parent", "clone", "use", "else", "break", "print", "eval", "new", "catch", "case",
    "exception", "default", "die", "enddeclare", "final", "try", "switch", "continue", "endfor",
    "endif", "declare", "unset", "trait", "goto", "instanceof", "insteadof", "yield", "finally",
];

pub(super) const PHP_LITERALS: &[&str] = &["false", "true", "null"];

pub(super) const PHP_BUILTIN: &[&str] = &[];

pub(super) const PHP_OTHER: &[&str] = &[
    "include_once", "include", "__FILE__", "require", "require_once", "__CLASS__", "__LINE__",
    "__METHOD__", "__FUNCTION__", "__DIR__", "__NAMESPACE__", "SERVER", "GET", "POST", "FILES",
    "REQUEST", "SESSION", "ENV", "COOKIE", "GLOBALS", "HTTP_RAW_POST_DATA", "argc", "argv",
    "php_errormsg", "http_response_header",
];

pub(super) const QML_TYPES: &[&str] = &[
    "Rectangle", "Text", "color", "Item", "url", "Component", "Button", "TextInput", "ListView",
];

pub(super) const QML_KEYWORDS: &[&str] = &[
    "default", "property", "int", "var", "string", "function", "readonly", "MouseArea", "delegate",
    "if", "else", "eval", "isFinite", "isNaN", "parseFloat", "parseInt", "decodeURI",
    "decodeURIComponent", "encodeURI", "encodeURIComponent", "escape", "unescape", "Object",
    "Error", "EvalError", "InternalError", "RangeError", "ReferenceError", "StopIteration",
    "SyntaxError", "TypeError", "URIError", "Number", "Math", "Date", "String", "RegExp", "Array",
    "Float32Array", "Float64Array", "Int16Array", "Int32Array", "Int8Array", "Uint16Array",
    "Uint32Array", "Uint8Array", "Uint8ClampedArray", "ArrayBuffer", "DataView", "JSON", "Intl",
    "arguments", "module", "console", "window", "document", "Symbol", "Set", "Map", "WeakSet",
    "WeakMap", "Proxy", "Reflect", "Behavior", "color", "coordinate", "date", "enumeration",
    "font", "geocircle", "georectangle", "geoshape", "list", "matrix4x4", "parent", "point",
    "quaternion", "real", "size", "variant", "vector2d", "vector3d", "vector4d", "Promise",
];

pub(super) const QML_LITERALS: &[&str] = &["false", "true"];

pub(super) const QML_BUILTIN: &[&str] = &[];

pub(super) const QML_OTHER: &[&str] = &["import"];

pub(super) const PY_TYPES: &[&str] = &[];

pub(super) const PY_KEYWORDS: &[&str] = &[
    "and", "elif", "is", "global", "as", "in", "if", "from", "raise", "for", "except", "finally",
    "print", "pass", "return", "exec", "else", "break", "not", "with", "class", "assert", "yield",
    "try", "while", "continue", "del", "or", "def", "lambda", "async", "await", "nonlocal",
];

pub(super) const PY_LITERALS: &[&str] = &["False", "True", "None"];

pub(super) const PY_BUILTIN: &[&str] = &[
    "__import__", "abs", "all", "any", "apply", "ascii", "basestring", "bin", "bool", "buffer",
    "bytearray", "bytes", "callable", "chr", "classmethod", "cmp", "coerce", "compile", "complex",
    "delattr", "dict", "dir", "divmod", "enumerate", "eval", "execfile", "file", "filter", "float",
    "format", "frozenset", "getattr", "globals", "hasattr", "hash", "help", "hex", "id", "input",
    "int", "intern", "isinstance", "issubclass", "iter", "len", "list", "locals", "long", "map",
    "max", "memoryview", "min", "next", "object", "oct", "open", "ord", "pow", "property", "range",
    "raw_input", "reduce", "reload", "repr", "reversed", "round", "set", "setattr", "slice",
    "sorted", "staticmethod", "str", "sum", "super", "tuple", "type", "unichr", "unicode", "vars",
    "xrange", "zip",
];

pub(super) const PY_OTHER: &[&str] = &["import"];

pub(super) const RUST_TYPES: &[&str] = &[
    "union", "enum", "struct", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32",
    "u64", "u128", "usize", "f32", "f64", "str", "char", "bool", "Box", "Option", "Result",
    "String", "Vec",
];

pub(super) const RUST_KEYWORDS: &[&str] = &[
    "abstract", "alignof", "as", "async", "await", "be", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "extern", "final", "fn", "for", "if", "impl", "in", "let",
    "loop", "match", "mod", "move", "mut", "offsetof", "once", "override", "priv", "pub", "pure",
    "ref", "return", "sizeof", "static", "self", "Self", "super", "trait", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

pub(super) const RUST_LITERALS: &[&str] = &["false", "true"];

pub(super) const RUST_BUILTIN: &[&str] = &[];

pub(super) const RUST_OTHER: &[&str] = &[
    "assert!", "assert_eq!", "bitflags!", "bytes!", "cfg!", "col!", "concat!", "concat_idents!",
    "debug_assert!", "debug_assert_eq!", "env!", "panic!", "file!", "format!", "format_args!",
    "include_bin!", "include_str!", "line!", "local_data_key!", "module_path!", "option_env!",
    "print!", "println!", "select!", "stringify!", "try!", "unimplemented!", "unreachable!",
    "vec!", "write!", "writeln!", "macro_rules!", "assert_ne!", "debug_assert_ne!",
];

pub(super) const JAVA_TYPES: &[&str] = &[
    "void", "float", "boolean", "byte", "int", "char", "class", "double", "enum", "short",
];

pub(super) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "break", "case", "catch", "const", "continue", "default", "do", "else",
    "exports", "extends", "final", "finally", "for", "goto", "if", "implements", "import",
    "instanceof", "interface", "long", "module", "native", "new", "null", "open", "opens",
    "package", "private", "protected", "provides", "public", "requires", "return", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "to", "transient",
    "transitive", "try", "uses", "var", "volatile", "while", "with", "yield",
];

pub(super) const JAVA_LITERALS: &[&str] = &["false", "true"];

pub(super) const JAVA_BUILTIN: &[&str] = &[];

pub(super) const JAVA_OTHER: &[&str] = &[];

pub(super) const CSHARP_TYPES: &[&str] = &[
    "bool", "byte", "char", "class", "double", "enum", "float", "int", "sbyte", "short", "string",
    "struct", "uint", "ulong", "ushort", "var", "void",
];

pub(super) const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "add", "alias", "as", "ascending", "async", "await", "base", "break", "case",
    "catch", "checked", "const", "continue", "decimal", "default", "delegate", "descending", "do",
    "dynamic", "else", "event", "explicit", "extern", "finally", "fixed", "for", "foreach", "from",
    "get", "global", "goto", "group", "if", "implicit", "in", "interface", "internal", "into",
    "is", "join", "let", "lock", "long", "namespace", "new", "object", "operator", "orderby",
    "out", "override", "params", "partial", "private", "protected", "public", "readonly", "ref",
    "remove", "return", "sealed", "select", "set", "sizeof", "stackalloc", "static", "switch",
    "this", "throw", "try", "typeof", "unchecked", "unsafe", "using", "value", "virtual",
    "volatile", "where", "while", "yield",
];

pub(super) const CSHARP_LITERALS: &[&str] = &["false", "true", "null"];

pub(super) const CSHARP_BUILTIN: &[&str] = &[];

pub(super) const CSHARP_OTHER: &[&str] = &[
    "define", "elif", "else", "endif", "endregion", "error", "if", "line", "pragma", "region",
    "undef", "warning",
];

pub(super) const GO_TYPES: &[&str] = &[
    "map", "struct", "var", "bool", "byte", "complex64", "complex128", "float32", "float64",
    "int8", "int16", "int32", "int64", "string", "uint8", "uint16", "uint32", "uint64", "int",
    "uint", "uintptr", "rune",
];

pub(super) const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for",
    "func", "go", "to", "if", "import", "interface", "package", "range", "return", "select",
    "struct", "switch", "type",
];

pub(super) const GO_LITERALS: &[&str] = &["false", "true", "nil", "iota"];

pub(super) const GO_BUILTIN: &[&str] = &[
    "append", "cap", "close", "complex", "copy", "imag", "len", "make", "new", "panic", "print",
    "println", "real", "recover", "delete",
];

pub(super) const GO_OTHER: &[&str] = &[];

pub(super) const V_TYPES: &[&str] = &[
    "map", "struct", "bool", "byte", "f32", "f64", "i8", "i16", "int", "i64", "i128", "string",
    "u16", "u32", "u64", "u128", "byteptr", "voidptr", "rune",
];

pub(super) const V_KEYWORDS: &[&str] = &[
    "break", "const", "continue", "defer", "else", "for", "fn", "go", "goto", "if", "import",
    "interface", "return", "struct", "switch", "type", "pub", "or", "none",
];

pub(super) const V_LITERALS: &[&str] = &["false", "true"];

pub(super) const V_BUILTIN: &[&str] = &[];

pub(super) const V_OTHER: &[&str] = &[];

pub(super) const SQL_TYPES: &[&str] = &[];

pub(super) const SQL_KEYWORDS: &[&str] = &[
    "ACTION", "ADD", "AFTER", "ALGORITHM", "ALL", "ALTER", "ANALYZE", "ANY", "APPLY", "AS", "ASC",
    "AUTHORIZATION", "AUTO_INCREMENT", "BACKUP", "BDB", "BEGIN", "BERKELEYDB", "BIGINT", "BINARY",
    "BIT", "BLOB", "BOOL", "BOOLEAN", "BREAK", "BROWSE", "BTREE", "BULK", "BY", "CALL", "CASCADED",
    "CASE", "CHAIN", "CHARACTER", "SET", "CHECKPOINT", "CLOSE", "CLUSTERED", "COALESCE", "COLLATE",
    "COLUMNS", "COMMENT", "COMMITTED", "COMPUTE", "CONNECT", "CONSISTENT", "CONSTRAINT",
    "CONTAINSTABLE", "CONTINUE", "CONVERT", "CREATE", "CROSS", "CURRENT_DATE", "_TIME",
    "_TIMESTAMP", "_USER", "CURSOR", "CYCLE", "DATABASES", "DATETIME", "DAY", "DBCC", "DEALLOCATE",
    "DEC", "DECIMAL", "DECLARE", "DEFAULT", "DEFINER", "DELAYED", "DELETE", "DELIMITERS", "DENY",
    "DESC", "DESCRIBE", "DETERMINISTIC", "DISABLE", "DISCARD", "DISK", "DISTINCT", "DISTINCTROW",
    "DISTRIBUTED", "DO", "DOUBLE", "DROP", "DUMMY", "DUMPFILE", "DUPLICATE", "ELSEIF", "ENABLE",
    "ENCLOSED", "END", "ENGINE", "ENUM", "ERRLVL", "ERRORS", "ESCAPED", "EXCEPT", "EXECUTE",
    "EXISTS", "EXIT", "EXPLAIN", "EXTENDED", "FETCH", "FIELDS", "FILE", "FILLFACTOR", "FIRST",
    "FIXED", "FLOAT", "FOLLOWING", "FOR", "EACH", "ROW", "FORCE", "FOREIGN", "FREETEXTTABLE",
    "FROM", "FULL", "FUNCTION", "GEOMETRYCOLLECTION", "GLOBAL", "GOTO", "GRANT", "GROUP",
    "HANDLER", "HASH", "HAVING", "HOLDLOCK", "HOUR", "IDENTITY_INSERT", "COL", "IF", "IGNORE",
    "IMPORT", "INDEX", "INFILE", "INNER", "INNODB", "INOUT", "INSERT", "INT", "INTEGER",
    "INTERSECT", "INTERVAL", "INTO", "INVOKER", "ISOLATION", "ITERATE", "JOIN", "KEYS", "KILL",
    "LANGUAGE", "LAST", "LEAVE", "LEFT", "LEVEL", "LIMIT", "LINENO", "LINES", "LINESTRING", "LOAD",
    "LOCAL", "LOCK", "LONGBLOB", "TEXT", "LOOP", "MATCHED", "MEDIUMBLOB", "MERGE", "MIDDLEINT",
    "MINUTE", "MODE", "MODIFIES", "MODIFY", "MONTH", "MULTILINESTRING", "POINT", "POLYGON",
    "NATIONAL", "NATURAL", "NCHAR", "NEXT", "NO", "NONCLUSTERED", "NULLIF", "NUMERIC", "OFF",
    "OFFSETS", "ON", "OPENDATASOURCE", "QUERY", "ROWSET", "OPTIMIZE", "OPTIONALLY", "ORDER",
    "OUTER", "OVER", "PARTIAL", "PARTITION", "PERCENT", "PIVOT", "PLAN", "PRECEDING", "PRECISION",
    "PREPARE", "PREV", "PRIMARY", "PRINT", "PRIVILEGES", "PROCEDURE", "PUBLIC", "PURGE", "QUICK",
    "RAISERROR", "READS", "REAL", "RECONFIGURE", "REFERENCES", "RELEASE", "RENAME", "REPEATABLE",
    "REPLACE", "REPLICATION", "REQUIRE", "RESIGNAL", "RESTORE", "RESTRICT", "RETURNS", "REVOKE",
    "RIGHT", "ROLLBACK", "ROUTINE", "ROWCOUNT", "GUIDCOL", "RTREE", "RULE", "SAVEPOINT", "SCHEMA",
    "SECOND", "SELECT", "SERIALIZABLE", "SESSION_USER", "SETUSER", "SHARE", "SHOW", "SHUTDOWN",
    "SIMPLE", "SMALLINT", "SNAPSHOT", "SOME", "SONAME", "SQL", "STARTING", "STATISTICS", "STATUS",
    "STRIPED", "SYSTEM_USER", "TABLES", "TABLESPACE", "TEMPORARY", "TABLE", "TERMINATED",
    "TEXTSIZE", "THEN", "TIMESTAMP", "TINYBLOB", "TOP", "TRANSACTIONS", "TRIGGER", "TRUNCATE",
    "TSEQUAL", "TYPES", "UNBOUNDED", "UNCOMMITTED", "UNDEFINED", "UNION", "UNIQUE", "UNLOCK",
    "UNPIVOT", "UNSIGNED", "UPDATETEXT", "USAGE", "USE", "USER", "USING", "VALUES", "VARBINARY",
    "CHAR", "YING", "VIEW", "WAITFOR", "WARNINGS", "WHEN", "WHERE", "WHILE", "WITH", "ROLLUP",
    "IN", "WORK", "WRITETEXT", "YEAR",
];

pub(super) const SQL_LITERALS: &[&str] = &["TRUE", "FALSE", "NULL"];

pub(super) const SQL_BUILTIN: &[&str] = &[
    "AVG", "COUNT", "FIRST", "FORMAT", "LAST", "LCASE", "LEN", "MAX", "MID", "MIN", "MOD", "NOW",
    "ROUND", "SUM", "UCASE",
];

pub(super) const SQL_OTHER: &[&str] = &[];

pub(super) const JSON_TYPES: &[&str] = &[];

pub(super) const JSON_KEYWORDS: &[&str] = &[];

pub(super) const JSON_LITERALS: &[&str] = &["false", "true", "null"];

pub(super) const JSON_BUILTIN: &[&str] = &[];

pub(super) const JSON_OTHER: &[&str] = &[];

pub(super) const CSS_TYPES: &[&str] = &[
    "align", "content", "items", "self", "all", "animation", "delay", "direction", "duration",
    "fill", "mode", "iteration", "count", "name", "play", "state", "timing", "function", "azimuth",
    "backface", "visibility", "attachment", "blend", "clip", "color", "image", "origin",
    "position", "repeat", "size", "background", "bleed", "radius", "style", "width", "bottom",
    "collapse", "outset", "source", "slice", "left", "right", "spacing", "top", "border", "break",
    "box", "shadow", "sizing", "after", "before", "inside", "caption", "side", "caret", "clear",
    "columns", "column", "gap", "rule", "span", "increment", "counter", "reset", "cue", "cursor",
    "display", "elevation", "empty", "cells", "filter", "flex", "basis", "feature", "settings",
    "flow", "grow", "shrink", "wrap", "float", "family", "kerning", "language", "override",
    "adjust", "stretch", "synthesis", "variant", "alternates", "caps", "east", "asian",
    "ligatures", "numeric", "weight", "font", "area", "auto", "rows", "end", "start", "row",
    "areas", "template", "grid", "hanging", "punctuation", "height", "hyphens", "isolation",
    "justify", "leftimage", "letter", "line", "type", "list", "margin", "marker", "offset",
    "marks", "max", "min", "mix", "nav", "up", "down", "opacity", "order", "orphans", "outline",
    "overflow", "padding", "page", "pause", "perspective", "range", "pitch", "place", "during",
    "quotes", "resize", "rest", "richness", "header", "numeral", "speak", "speech", "rate",
    "stress", "tab", "table", "layout", "text", "last", "decoration", "skip", "indent",
    "transform", "underline", "transition", "property", "unicode", "bidi", "vertical", "balance",
    "volume", "voice", "white", "space", "widows", "will", "change", "word", "x", "y", "z",
    "index", "rgb", "sans", "serif", "normal",
];

pub(super) const CSS_KEYWORDS: &[&str] = &["important", "px", "em"];

pub(super) const CSS_LITERALS: &[&str] = &[];

pub(super) const CSS_BUILTIN: &[&str] = &[];

pub(super) const CSS_OTHER: &[&str] = &[];

pub(super) const TYPESCRIPT_TYPES: &[&str] = &["var", "class", "enum"];

pub(super) const TYPESCRIPT_KEYWORDS: &[&str] = &[
    "in", "if", "for", "while", "finally", "new", "function", "do", "return", "void", "else",
    "break", "catch", "instanceof", "with", "throw", "case", "default", "try", "this", "switch",
    "continue", "typeof", "delete", "let", "yield", "const", "public", "private", "protected",
    "get", "set", "super", "static", "implements", "export", "import", "declare", "type",
    "namespace", "abstract", "as", "from", "extends", "async", "await",
];

pub(super) const TYPESCRIPT_LITERALS: &[&str] = &[
    "false", "null", "true", "undefined", "NaN", "Infinity",
];

pub(super) const TYPESCRIPT_BUILTIN: &[&str] = &[
    "eval", "isFinite", "isNaN", "parseFloat", "parseInt", "decodeURI", "decodeURIComponent",
    "encodeURI", "encodeURIComponent", "escape", "unescape", "Object", "Function", "Boolean",
    "Error", "EvalError", "InternalError", "RangeError", "ReferenceError", "StopIteration",
    "SyntaxError", "TypeError", "URIError", "Number", "Math", "Date", "String", "RegExp", "Array",
    "Float32Array", "Float64Array", "Int16Array", "Int32Array", "Int8Array", "Uint16Array",
    "Uint32Array", "Uint8Array", "Uint8ClampedArray", "ArrayBuffer", "DataView", "JSON", "Intl",
    "arguments", "require", "module", "console", "window", "document", "any", "number", "boolean",
    "string", "void", "Promise",
];

pub(super) const TYPESCRIPT_OTHER: &[&str] = &[];
