use tagval_validator::Record;
use tagval_validator::foundation::{FieldValue, TypeTag};
use tagval_validator::record::describe;

struct Email(String);

#[derive(Record)]
#[record(name = "Account")]
struct AccountForm<'a> {
    #[validate(rule = "min=5,max=32")]
    name: String,
    #[validate(rule = "regexemail")]
    email: Email,
    #[validate(skip)]
    nickname: &'a str,
    age: i32,
    r#type: u8,
    active: bool,
}

fn main() {
    let form = AccountForm {
        name: "Testowe".to_string(),
        email: Email("test@example.com".to_string()),
        nickname: "t",
        age: 30,
        r#type: 1,
        active: true,
    };
    let _ = &form.email.0;

    assert_eq!(<AccountForm<'_> as tagval_validator::record::Record>::NAME, "Account");

    let fields = describe::<AccountForm<'_>>();
    assert_eq!(fields.len(), 6);
    assert_eq!(fields[1].type_tag, TypeTag::Other("Email"));
    assert_eq!(fields[2].rule.raw(), "-");
    assert_eq!(fields[4].name, "type");
    assert_eq!(fields[1].rust_type, "Email");
    assert_eq!(fields[2].rust_type, "&'a str");
    assert_eq!(fields[3].rust_type, "i32");

    assert_eq!(form.field_value(0), Some(FieldValue::Str("Testowe")));
    assert_eq!(form.field_value(1), Some(FieldValue::Opaque("Email")));
    assert_eq!(form.field_value(2), Some(FieldValue::Str("t")));
    assert_eq!(form.field_value(5), Some(FieldValue::Bool(true)));
    assert_eq!(form.field_value(6), None);
}
