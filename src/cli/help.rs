//! Usage text for the `enc` demo binary (spec §6.3), grounded in
//! `examples/enc.c`'s `syntax_error`.

pub fn print_usage(program: &str) {
    eprintln!(
        "Syntax: {program} [-eb|-db|-eh|-eH|-dh|-ex|-dx|-ej|-dj|-eu|-du|\
         -ez|-dz|-ezh|-crc32|-adler32|-fnv1|-fnv1a|-mh3_32]\n\
         Reads stdin, writes stdout.\n\
         Examples:\n  \
         {program} -eb <in >out.b64\n  \
         {program} -db <in.b64 >out\n  \
         {program} -eh <in >out.hex\n  \
         {program} -eH <in >out.HEX\n  \
         {program} -dh <in.hex >out\n  \
         {program} -ex <in >out.xml.esc\n  \
         {program} -dx <in.xml.esc >out\n  \
         {program} -ej <in >out.json.esc\n  \
         {program} -dj <in.json.esc >out\n  \
         {program} -eu <in >out.url.esc\n  \
         {program} -du <in.url.esc >out\n  \
         {program} -ez <in >out.lz\n  \
         {program} -ezh <in >out.lz\n  \
         {program} -dz <in.lz >out\n  \
         {program} -crc32 <in\n  \
         {program} -adler32 <in\n  \
         {program} -fnv1 <in\n  \
         {program} -fnv1a <in\n  \
         {program} -mh3_32 <in\n"
    );
}
