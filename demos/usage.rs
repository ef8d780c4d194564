use delegate::{delegate, bind, bind_at, lit, Value};

struct Scaler { a: i64 }

fn scale(recv: &Scaler, args: &[Value]) -> Value {
    Value::from(recv.a * args[0].as_int().unwrap_or(0))
}

fn concat(_recv: &(), args: &[Value]) -> Value {
    let mut out = String::new();
    for arg in args {
        match arg {
            Value::String(s) => out.push_str(s),
            other => out.push_str(&other.to_string())
        }
    }
    Value::from(out)
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    // A bound receiver with no curried arguments forwards the call
    let d = delegate(Scaler { a: 2 }, scale, vec![]);
    println!("scale(3) with a = 2: {}", d.call(&[Value::from(3)]));

    // Arguments fixed at bind time are used on every invocation
    let curried = delegate(Scaler { a: 2 }, scale, vec![lit(Value::from(7))]);
    println!("curried scale(): {}", curried.call(&[]));

    // Placeholders pick invocation arguments by position
    let swapped = delegate((), concat, vec![bind_at(1), bind_at(0)]);
    println!("swapped(\"foo\", \"bar\"): {}",
             swapped.call(&[Value::from("foo"), Value::from("bar")]));

    let mixed = delegate((), concat, vec![lit(Value::from("curried")), bind()]);
    println!("mixed(\"late\"): {}", mixed.call(&[Value::from("late")]));
}
