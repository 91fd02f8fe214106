use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_os = "linux")] {
        pub(crate) mod linux;
        mod unix;
        pub(crate) use linux as imp;
    } else if #[cfg(target_os = "macos")] {
        pub(crate) mod macos;
        mod unix;
        pub(crate) use macos as imp;
    } else if #[cfg(all(target_family = "unix", not(target_os = "vxworks")))] {
        pub(crate) mod unix;
        pub(crate) use unix as imp;
    } else {
        compile_error!("unsupported OS");
    }
}
