use path_template::{captures, expand, Template};

const NONE: [&str; 0] = [];

#[test]
fn apply_variables() {
    let t = Template::new("/test/:variable");
    assert_eq!(t.render(&captures! { :variable => 1 }), "/test/1");

    let t = Template::new("/test/:test_num/example/:example_num");
    let params = captures! { :test_num => 2, :example_num => 1 };
    assert_eq!(t.render(&params), "/test/2/example/1");
}

#[test]
fn apply_positional() {
    let t = Template::new("/foo/:a/baz/:b");
    assert_eq!(t.apply(&["bar", "qux"], &captures! {}), "/foo/bar/baz/qux");

    let t = Template::new("/:a/:b");
    assert_eq!(t.apply(&["x", "y"], &captures! {}), "/x/y");
}

#[test]
fn apply_mixed_positional_and_keyed() {
    let t = Template::new("/:a/:b/:c");
    let params = captures! { :b => "B" };
    assert_eq!(t.apply(&["x", "y"], &params), "/x/B/y");
}

#[test]
fn apply_glob() {
    let t = Template::new("/:var/b/*rest");
    let params = captures! { :var => "a", :rest => vec!["c", "d"] };
    assert_eq!(t.render(&params), "/a/b/c/d");

    let t = Template::new("/:val/two/*rest");
    assert_eq!(
        t.apply(&["one", "three", "four"], &captures! {}),
        "/one/two/three/four"
    );
}

#[test]
fn apply_empty_glob() {
    let t = Template::new("/foo/*rest");
    assert_eq!(t.apply(NONE, &captures! {}), "/foo");
    assert_eq!(t.render(&captures! { :rest => Vec::<String>::new() }), "/foo");
}

#[test]
fn apply_format() {
    let t = Template::new("/:folder/:file.format");
    let params = captures! { :folder => "photos", :file => "me", :format => "jpg" };
    assert_eq!(t.render(&params), "/photos/me.jpg");

    let t = Template::new("/:path/:to.ext");
    assert_eq!(t.apply(&["notes", "todo", "txt"], &captures! {}), "/notes/todo.txt");
}

#[test]
fn apply_glob_with_format() {
    let t = Template::new("/:root/*path.format");

    let params = captures! {
        :root => "blog",
        :path => vec!["2011", "11", "4"],
        :format => "html",
    };
    assert_eq!(t.render(&params), "/blog/2011/11/4.html");

    let params = captures! { :root => "blog", :format => "html" };
    assert_eq!(t.apply(vec![2011, 11, 4], &params), "/blog/2011/11/4.html");
    assert_eq!(
        t.apply(&["blog", "2011", "11", "4", "html"], &captures! {}),
        "/blog/2011/11/4.html"
    );
}

#[test]
fn apply_no_leading_slash() {
    let t = Template::new(":foo/:bar");
    assert_eq!(t.render(&captures! { :foo => "baz", :bar => "qux" }), "baz/qux");
}

#[test]
fn apply_query_string() {
    let t = Template::new("/:var");
    let params = captures! { :var => "foo", "bar" => "baz", "qux" => "quxx" };
    assert_eq!(t.render(&params), "/foo?bar=baz&qux=quxx");

    let params = captures! { :var => "foo", :extra => "1", "list" => vec!["a", "b"] };
    assert_eq!(t.render(&params), "/foo?extra=1&list=a&list=b");
}

#[test]
fn apply_base_path() {
    let t = Template::new("/");
    assert_eq!(t.apply(NONE, &captures! {}), "/");
    assert_eq!(t.render(&captures! { "foo" => "bar" }), "/?foo=bar");
}

#[test]
fn apply_missing_values_are_left_out() {
    let t = Template::new("/test/:variable");
    assert_eq!(t.apply(NONE, &captures! {}), "/test");

    let t = Template::new("/:file.format");
    assert_eq!(t.render(&captures! { :file => "a" }), "/a");
}

#[test]
fn apply_does_not_touch_params() {
    let t = Template::new("/:id");
    let params = captures! { :id => "1", "q" => "x" };
    assert_eq!(t.render(&params), "/1?q=x");
    assert_eq!(params.len(), 2);
}

#[test]
fn expand_pattern() {
    let path = expand("/blog/:year/:month/:day", &["2011", "nov", "4"], &captures! {}).unwrap();
    assert_eq!(path, "/blog/2011/nov/4");

    let params = captures! { :year => 2011, :month => "nov", :day => 4 };
    let path = expand("/blog/:year/:month/:day", NONE, &params).unwrap();
    assert_eq!(path, "/blog/2011/nov/4");

    assert!(expand("/*a/*b", NONE, &captures! {}).is_err());
}
