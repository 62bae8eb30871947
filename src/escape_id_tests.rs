#[cfg(test)]
mod tests {
    use crate::escape_id::escape_id;
    use crate::value::{SqlMap, Value};
    use pretty_assertions::assert_eq;

    fn id(v: impl Into<Value>) -> String {
        escape_id(&v.into(), false)
    }

    #[test]
    fn value_is_quoted() {
        assert_eq!(id("id"), "[id]");
    }

    #[test]
    fn numbers_and_objects_use_natural_string() {
        assert_eq!(id(42_i64), "[42]");
        assert_eq!(id(Value::object("foo")), "[foo]");
        assert_eq!(id(Value::object("[foo]")), "[[foo]]]");
        assert_eq!(id(SqlMap::new()), "[{}]");
    }

    #[test]
    fn closing_brackets_are_doubled() {
        assert_eq!(id("i]d"), "[i]]d]");
        assert_eq!(id("i\"d"), "[i\"d]");
        assert_eq!(id("]]"), "[]]]]]");
    }

    #[test]
    fn doubling_invariant_holds() {
        for s in ["", "a", "]", "a]b]c", "x]]y", "[]", "]a[", "q]"] {
            let out = escape_id(&Value::from(s), true);
            let n_in = s.matches(']').count();
            let n_out = out.matches(']').count();
            assert_eq!(n_out, 2 * n_in + 1, "{s}");
            assert!(out.starts_with('[') && out.ends_with(']'));
        }
    }

    #[test]
    fn qualified_names_split_on_first_dot() {
        assert_eq!(id("id1.id2"), "[id1].[id2]");
        assert_eq!(id("id[1.i]d2"), "[id[1].[i]]d2]");
        assert_eq!(id("a.b.c"), "[a].[b.c]");
        assert_eq!(id(".b"), "[].[b]");
    }

    #[test]
    fn forbid_qualified_quotes_whole_name() {
        assert_eq!(escape_id(&Value::from("id1.id2"), true), "[id1.id2]");
        assert_eq!(escape_id(&Value::from("a.b]"), true), "[a.b]]]");
    }

    #[test]
    fn lists_are_joined() {
        assert_eq!(id(vec!["a", "b", "t.c"]), "[a], [b], [t].[c]");
    }

    #[test]
    fn nested_lists_are_flattened() {
        let v = Value::List(vec![
            "a".into(),
            Value::List(vec!["b".into(), Value::List(vec!["t.c".into()])]),
        ]);
        assert_eq!(id(v), "[a], [b], [t].[c]");
    }

    #[test]
    fn forbid_qualified_applies_to_list_items() {
        let v = Value::from(vec!["a.b", "c"]);
        assert_eq!(escape_id(&v, true), "[a.b], [c]");
    }
}
