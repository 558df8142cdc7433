fn main() {
    ripmkv_lib::run()
}
