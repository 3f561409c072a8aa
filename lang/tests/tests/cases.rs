use nospace_tests::{fail_case, pass_case};

pass_case!(hello, "hello.nsa");
pass_case!(hello_invisible, "hello.ns");
pass_case!(hello_whitespace, "hello.ws");
pass_case!(countdown, "countdown.nsa");
pass_case!(sign, "sign.nsa");
pass_case!(print_twice, "print_twice.nsa");
pass_case!(pragmas, "pragmas.nsa");
pass_case!(union_call, "union_call.nsa");

fail_case!(underflow, "underflow.nsa");
fail_case!(mismatch, "mismatch.nsa");
fail_case!(strict, "strict.nsa");
fail_case!(strict_invisible, "strict.ns");
fail_case!(diverging_loop, "diverging_loop.nsa");
fail_case!(bad_argument, "bad_argument.nsa");
